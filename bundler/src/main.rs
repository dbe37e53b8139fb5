//! Asset build pipeline CLI.
//!
//! Compiles the client crate to WASM, fingerprints and copies bundle
//! files into the output directory, and writes the build stats file the
//! server reads at render time.

mod config;
mod pipeline;
mod stats;

use clap::Parser;

use crate::config::{BundleArgs, BundleConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let args = BundleArgs::parse();
    let config = BundleConfig::from_args(&args);

    if let Err(err) = pipeline::run_build(&config) {
        tracing::error!(error = %err, "build failed");
        std::process::exit(1);
    }
}
