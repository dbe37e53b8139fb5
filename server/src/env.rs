//! Server configuration resolved from the process environment.

use std::path::PathBuf;

use manifest::Mode;

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Server configuration with defaults suitable for local development.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub mode: Mode,
    /// Directory holding bundled assets and the build stats file.
    pub dist_dir: PathBuf,
    /// URL prefix under which bundled assets are served.
    pub public_path: String,
}

impl ServerConfig {
    /// Resolve configuration from an environment lookup.
    ///
    /// # Panics
    ///
    /// Panics if `PORT` is present but not a valid TCP port number.
    #[must_use]
    pub fn resolve(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = var("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("invalid PORT");
        let mode = var("RUN_MODE").map_or(Mode::Development, |v| Mode::parse(&v));
        let dist_dir = var("DIST_DIR").map_or_else(|| PathBuf::from("dist"), PathBuf::from);
        let public_path = var("PUBLIC_PATH").unwrap_or_else(|| "/statics/".to_owned());

        Self {
            port,
            mode,
            dist_dir,
            public_path,
        }
    }

    /// Resolve from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Directory served under the public path.
    #[must_use]
    pub fn statics_dir(&self) -> PathBuf {
        self.dist_dir.join("statics")
    }
}
