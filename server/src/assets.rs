//! Asset resolution: logical chunk names to fingerprinted bundle files.
//!
//! DESIGN
//! ======
//! The bundler writes `bundle-stats.json` into the dist directory.
//! Production loads it once at startup and serves from the cached copy;
//! missing stats are fatal there. Development re-reads the file on
//! every page render and falls back to logical names, so a dev server
//! stays up while the bundler rewrites its output.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use manifest::{BuildStats, Mode, STATS_FILE_NAME, StatsFile};

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Logical chunk names every page depends on.
pub const APP_JS: &str = "app.js";
pub const APP_WASM: &str = "app_bg.wasm";
pub const APP_CSS: &str = "app.css";

/// Tag fragments handed to the document template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetTags {
    /// Stylesheet `<link>` tags.
    pub styles: String,
    /// `<script>` tags that load and start the bundle.
    pub scripts: String,
    /// CSS fingerprint marker.
    pub css_hash: String,
}

/// Resolves asset tags for page renders.
#[derive(Clone, Debug)]
pub struct AssetService {
    dist_dir: PathBuf,
    public_path: String,
    /// Stats snapshot loaded at startup. Production only.
    cached: Option<Arc<BuildStats>>,
}

impl AssetService {
    /// Build the service for the given mode.
    ///
    /// # Errors
    ///
    /// Outside development, returns the stats load error when
    /// `bundle-stats.json` is missing or malformed; pages must never go
    /// out with unfingerprinted asset names there.
    pub fn new(
        mode: Mode,
        dist_dir: PathBuf,
        public_path: String,
    ) -> Result<Self, manifest::StatsError> {
        let cached = if mode.is_dev() {
            None
        } else {
            let stats = StatsFile::load(&stats_path(&dist_dir))?;
            Some(Arc::new(stats.stats_json))
        };
        Ok(Self {
            dist_dir,
            public_path,
            cached,
        })
    }

    /// Resolve the tag set for one page render.
    #[must_use]
    pub fn tags(&self) -> AssetTags {
        match &self.cached {
            Some(stats) => build_tags(stats, &self.public_path),
            None => match StatsFile::load(&stats_path(&self.dist_dir)) {
                Ok(stats) => build_tags(&stats.stats_json, &self.public_path),
                Err(err) => {
                    tracing::warn!(error = %err, "no build stats; serving logical asset names");
                    fallback_tags(&self.public_path)
                }
            },
        }
    }
}

/// Stats file location for a dist directory.
#[must_use]
pub fn stats_path(dist_dir: &Path) -> PathBuf {
    dist_dir.join(STATS_FILE_NAME)
}

/// Format the tag set from a stats snapshot. Chunks missing from the
/// snapshot fall back to their logical names.
#[must_use]
pub fn build_tags(stats: &BuildStats, public_path: &str) -> AssetTags {
    let js = stats.asset_for(APP_JS).unwrap_or(APP_JS);
    let wasm = stats.asset_for(APP_WASM).unwrap_or(APP_WASM);
    let css = stats.asset_for(APP_CSS).unwrap_or(APP_CSS);

    AssetTags {
        styles: stylesheet_tag(public_path, css),
        scripts: bootstrap_script_tag(public_path, js, wasm),
        css_hash: css_hash_marker(&stats.hash),
    }
}

/// Tag set when no stats file exists yet (development before the first
/// bundle). Uses logical names and no fingerprint marker.
#[must_use]
pub fn fallback_tags(public_path: &str) -> AssetTags {
    AssetTags {
        styles: stylesheet_tag(public_path, APP_CSS),
        scripts: bootstrap_script_tag(public_path, APP_JS, APP_WASM),
        css_hash: String::new(),
    }
}

fn stylesheet_tag(public_path: &str, file: &str) -> String {
    format!("<link href=\"{public_path}{file}\" rel=\"stylesheet\">")
}

/// Module script that imports the wasm-bindgen bundle and starts it
/// with an explicit wasm URL, so fingerprinted wasm files resolve.
fn bootstrap_script_tag(public_path: &str, js: &str, wasm: &str) -> String {
    format!(
        "<script type=\"module\">import init from '{public_path}{js}'; init('{public_path}{wasm}');</script>"
    )
}

/// Build fingerprint marker appended at the end of `<body>`.
fn css_hash_marker(hash: &str) -> String {
    format!("<!-- css {hash} -->")
}
