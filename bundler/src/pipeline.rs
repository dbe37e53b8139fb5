//! Build pipeline stages: compile, package, stats.
//!
//! DESIGN
//! ======
//! Stages are plain functions over `BundleConfig`. `compile` shells out
//! to cargo and wasm-bindgen, `package` fingerprints and copies bundle
//! inputs into the statics directory, and `run_build` strings the
//! stages together, finishing with the stats dump. Any stage failure
//! aborts the run; a failed stats write fails the whole build even
//! though assets were already emitted.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use manifest::{Asset, BuildStats};
use sha2::{Digest, Sha256};

use crate::config::BundleConfig;
use crate::stats;

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

/// Error aborting a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}")]
    Tool {
        tool: &'static str,
        status: std::process::ExitStatus,
    },
    #[error("failed to read bundle input {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write asset {path}: {source}")]
    WriteAsset {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no bundle inputs found in {path}")]
    EmptyInput { path: String },
    #[error(transparent)]
    Stats(#[from] stats::StatsWriteError),
}

/// One packaged asset: the logical chunk name plus the emitted copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedAsset {
    pub chunk: String,
    pub file_name: String,
    pub size: u64,
    pub hash: String,
}

/// Run the full pipeline for one configuration.
///
/// # Errors
///
/// Returns the first stage failure, including a failed stats write.
pub fn run_build(config: &BundleConfig) -> Result<(), BuildError> {
    let started = Instant::now();
    tracing::info!(mode = config.mode.as_str(), out = %config.out_dir.display(), "build started");

    if config.compile {
        compile(config)?;
    }

    let emitted = package(config)?;
    let time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let build = build_stats(config, &emitted, time_ms);

    let stats_path = stats::write_stats(&config.stats_output_dir(), &build)?;
    tracing::info!(
        stats = %stats_path.display(),
        assets = emitted.len(),
        time_ms,
        "build finished"
    );
    Ok(())
}

/// Compile the client crate to WASM and run wasm-bindgen over the
/// artifact, leaving loadable bundle files in the input directory.
///
/// # Errors
///
/// Returns an error when either tool cannot be spawned or exits nonzero.
pub fn compile(config: &BundleConfig) -> Result<(), BuildError> {
    let mut cargo = Command::new("cargo");
    cargo.args([
        "build",
        "-p",
        "client",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "csr",
    ]);
    if let Some(flag) = config.cargo_profile_flag() {
        cargo.arg(flag);
    }
    run_tool("cargo", &mut cargo)?;

    let mut bindgen = Command::new("wasm-bindgen");
    bindgen
        .arg("--target")
        .arg("web")
        .arg("--out-dir")
        .arg(&config.input_dir)
        .arg("--out-name")
        .arg("app")
        .arg(wasm_artifact_path(config));
    if config.mode.is_dev() {
        bindgen.arg("--debug");
    }
    run_tool("wasm-bindgen", &mut bindgen)
}

/// Fingerprint and copy bundle inputs into the statics directory.
///
/// Inputs are the wasm-bindgen outputs plus any CSS next to them.
/// Emitted names carry an 8-hex-digit content fingerprint in production
/// and stay logical in development.
///
/// # Errors
///
/// Returns an error when the input directory is empty or unreadable, or
/// when an asset copy fails.
pub fn package(config: &BundleConfig) -> Result<Vec<EmittedAsset>, BuildError> {
    let inputs = bundle_inputs(&config.input_dir)?;
    if inputs.is_empty() {
        return Err(BuildError::EmptyInput {
            path: config.input_dir.display().to_string(),
        });
    }

    let statics = config.statics_dir();
    std::fs::create_dir_all(&statics).map_err(|source| BuildError::WriteAsset {
        path: statics.display().to_string(),
        source,
    })?;

    let mut emitted = Vec::with_capacity(inputs.len());
    for input in inputs {
        let bytes = std::fs::read(&input).map_err(|source| BuildError::ReadInput {
            path: input.display().to_string(),
            source,
        })?;
        let chunk = file_name_of(&input);
        let hash = content_hash(&bytes);
        let file_name = if config.hashed_filenames() {
            hashed_file_name(&chunk, &hash)
        } else {
            chunk.clone()
        };

        let dest = statics.join(&file_name);
        std::fs::write(&dest, &bytes).map_err(|source| BuildError::WriteAsset {
            path: dest.display().to_string(),
            source,
        })?;
        tracing::debug!(chunk, emitted = file_name, size = bytes.len(), "asset emitted");

        emitted.push(EmittedAsset {
            chunk,
            file_name,
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            hash,
        });
    }

    Ok(emitted)
}

/// Assemble the stats document for one finished build. The build hash
/// digests the per-asset fingerprints, so it changes whenever any
/// emitted byte does.
#[must_use]
pub fn build_stats(config: &BundleConfig, emitted: &[EmittedAsset], time_ms: u64) -> BuildStats {
    let mut assets = Vec::with_capacity(emitted.len());
    let mut by_chunk = BTreeMap::new();
    let mut build_digest = Sha256::new();

    for asset in emitted {
        build_digest.update(asset.hash.as_bytes());
        assets.push(Asset {
            name: asset.file_name.clone(),
            size: asset.size,
            chunk: asset.chunk.clone(),
        });
        by_chunk.insert(asset.chunk.clone(), asset.file_name.clone());
    }

    BuildStats {
        hash: hex_prefix(&build_digest.finalize()),
        mode: config.mode,
        time_ms,
        output_path: config.out_dir.display().to_string(),
        public_path: config.public_path.clone(),
        assets,
        assets_by_chunk_name: by_chunk,
    }
}

/// First 8 hex digits of the SHA-256 digest of `bytes`.
#[must_use]
pub fn content_hash(bytes: &[u8]) -> String {
    hex_prefix(&Sha256::digest(bytes))
}

/// Insert a fingerprint before the final extension:
/// `app.js` + `3f2a91bc` becomes `app.3f2a91bc.js`.
#[must_use]
pub fn hashed_file_name(logical: &str, hash: &str) -> String {
    match logical.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}.{hash}.{ext}"),
        None => format!("{logical}.{hash}"),
    }
}

fn run_tool(tool: &'static str, command: &mut Command) -> Result<(), BuildError> {
    let status = command
        .status()
        .map_err(|source| BuildError::Spawn { tool, source })?;
    if status.success() {
        Ok(())
    } else {
        Err(BuildError::Tool { tool, status })
    }
}

/// Where cargo leaves the compiled client wasm artifact.
fn wasm_artifact_path(config: &BundleConfig) -> PathBuf {
    let profile = if config.mode.is_dev() { "debug" } else { "release" };
    PathBuf::from("target")
        .join("wasm32-unknown-unknown")
        .join(profile)
        .join("client.wasm")
}

/// Bundle input files in stable name order.
fn bundle_inputs(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let entries = std::fs::read_dir(dir).map_err(|source| BuildError::ReadInput {
        path: dir.display().to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BuildError::ReadInput {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if is_bundle_input(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Only JS, WASM, and CSS files are packaged; wasm-bindgen `.d.ts`
/// outputs and anything else stay behind.
fn is_bundle_input(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("js" | "wasm" | "css")
    )
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
}

fn hex_prefix(digest: &[u8]) -> String {
    let mut out = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
