//! Shared build-stats model for the bundler and the server.
//!
//! This crate owns the on-disk stats document the bundler writes after
//! every build and the server reads to resolve logical asset names
//! ("app.js") to fingerprinted emitted names ("app.3f2a91bc.js"). The
//! document keeps the established camelCase wire shape and wraps the
//! stats object in a single `statsJson` key.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name the bundler writes and the server looks for.
pub const STATS_FILE_NAME: &str = "bundle-stats.json";

/// Error returned by [`StatsFile::load`].
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The stats file could not be read.
    #[error("failed to read stats file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a valid stats document.
    #[error("failed to parse stats file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Build/serve mode. Written into stats as a lowercase string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Parse a mode string. Unrecognized values fall back to development
    /// so a mistyped variable never silently serves production assets.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn is_dev(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Canonical lowercase name, as written into stats.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// On-disk stats document: the build stats wrapped in a `statsJson` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsFile {
    pub stats_json: BuildStats,
}

/// One build's summary: identity, timing, and every emitted asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// Fingerprint of the whole build (hex).
    pub hash: String,
    /// Mode the build ran in.
    pub mode: Mode,
    /// Wall-clock duration of the build in milliseconds.
    pub time_ms: u64,
    /// Directory assets were written to, as given to the bundler.
    pub output_path: String,
    /// URL prefix pages use to reference emitted assets.
    pub public_path: String,
    /// Every emitted asset, in emission order.
    pub assets: Vec<Asset>,
    /// Logical chunk name ("app.js") to emitted file name.
    pub assets_by_chunk_name: BTreeMap<String, String>,
}

/// One emitted asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Emitted file name, fingerprint included.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Logical chunk this asset was emitted for.
    pub chunk: String,
}

impl StatsFile {
    #[must_use]
    pub fn new(stats_json: BuildStats) -> Self {
        Self { stats_json }
    }

    /// Read and parse a stats file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Read`] when the file cannot be read and
    /// [`StatsError::Parse`] when it is not a valid stats document.
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StatsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StatsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Serialize the document for writing.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error. Stats built from emitted
    /// assets always serialize.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl BuildStats {
    /// Emitted file name for a logical chunk name, if the build produced it.
    #[must_use]
    pub fn asset_for(&self, chunk: &str) -> Option<&str> {
        self.assets_by_chunk_name.get(chunk).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
