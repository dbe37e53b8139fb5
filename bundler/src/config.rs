//! Bundle configuration: shared flags plus per-mode behavior.
//!
//! DESIGN
//! ======
//! One flag set covers both modes. `BundleConfig::from_args` resolves
//! the shared pieces; everything mode-dependent (fingerprinting, cargo
//! profile, debug symbols) hangs off the parsed mode instead of a
//! second configuration layer.

use std::path::PathBuf;

use clap::Parser;
use manifest::Mode;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bundler", about = "Rolodex asset build pipeline")]
pub struct BundleArgs {
    /// Build mode: `development` or `production`.
    #[arg(long, env = "RUN_MODE", default_value = "development")]
    pub mode: String,

    /// Output directory for the build.
    #[arg(long, env = "DIST_DIR", default_value = "dist")]
    pub out_dir: PathBuf,

    /// URL prefix pages use to reference emitted assets.
    #[arg(long, default_value = "/statics/")]
    pub public_path: String,

    /// Directory holding bundle inputs (wasm-bindgen output and CSS).
    #[arg(long, default_value = "client/pkg")]
    pub input_dir: PathBuf,

    /// Compile the client crate before packaging.
    #[arg(long)]
    pub compile: bool,

    /// Write the stats file into this directory instead of the output
    /// directory root.
    #[arg(long)]
    pub stats_dir: Option<PathBuf>,
}

/// Resolved build configuration.
#[derive(Clone, Debug)]
pub struct BundleConfig {
    pub mode: Mode,
    pub out_dir: PathBuf,
    pub public_path: String,
    pub input_dir: PathBuf,
    pub compile: bool,
    pub stats_dir: Option<PathBuf>,
}

impl BundleConfig {
    /// Resolve arguments into a build configuration.
    #[must_use]
    pub fn from_args(args: &BundleArgs) -> Self {
        Self {
            mode: Mode::parse(&args.mode),
            out_dir: args.out_dir.clone(),
            public_path: normalize_public_path(&args.public_path),
            input_dir: args.input_dir.clone(),
            compile: args.compile,
            stats_dir: args.stats_dir.clone(),
        }
    }

    /// Directory emitted assets are copied into.
    #[must_use]
    pub fn statics_dir(&self) -> PathBuf {
        self.out_dir.join("statics")
    }

    /// Directory the stats file is written to. An explicit override wins
    /// over the output directory root.
    #[must_use]
    pub fn stats_output_dir(&self) -> PathBuf {
        self.stats_dir.clone().unwrap_or_else(|| self.out_dir.clone())
    }

    /// Whether emitted file names carry content fingerprints.
    /// Development keeps logical names so the dev server's fallback tags
    /// stay valid between builds.
    #[must_use]
    pub fn hashed_filenames(&self) -> bool {
        !self.mode.is_dev()
    }

    /// Extra cargo flag for the client compile, if any.
    #[must_use]
    pub fn cargo_profile_flag(&self) -> Option<&'static str> {
        if self.mode.is_dev() { None } else { Some("--release") }
    }
}

/// Normalize a public path to have exactly one leading and one trailing
/// slash, so tag builders can concatenate file names directly.
#[must_use]
pub fn normalize_public_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}
