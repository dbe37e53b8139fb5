//! Stats file emission.
//!
//! DESIGN
//! ======
//! The dump runs after every other stage has finished, so the document
//! always describes a completed build. Writes go through a temp file in
//! the target directory followed by a rename; a failed write never
//! leaves a partial stats file for the server to trip over.

use std::path::{Path, PathBuf};

use manifest::{BuildStats, STATS_FILE_NAME, StatsFile};

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Error writing the stats file. Fails the whole build.
#[derive(Debug, thiserror::Error)]
pub enum StatsWriteError {
    #[error("failed to serialize build stats: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write stats file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write the stats document into `dir` and return the final path.
///
/// # Errors
///
/// Returns [`StatsWriteError`] when the directory is missing or not
/// writable. No partial stats file is left behind in that case.
pub fn write_stats(dir: &Path, build: &BuildStats) -> Result<PathBuf, StatsWriteError> {
    let json = StatsFile::new(build.clone()).to_json()?;

    let final_path = dir.join(STATS_FILE_NAME);
    let tmp_path = dir.join(format!(".{STATS_FILE_NAME}.tmp"));

    std::fs::write(&tmp_path, json).map_err(|source| StatsWriteError::Write {
        path: tmp_path.display().to_string(),
        source,
    })?;

    if let Err(source) = std::fs::rename(&tmp_path, &final_path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(StatsWriteError::Write {
            path: final_path.display().to_string(),
            source,
        });
    }

    Ok(final_path)
}
