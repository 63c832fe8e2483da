use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::{error, info};

use crate::{error::ForecastError, model::ForecastRecord};

pub mod csv;
pub mod json;

pub const CSV_FILE_NAME: &str = "forecast.csv";
pub const JSON_FILE_NAME: &str = "forecast.json";

/// Where the two export files land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl OutputPaths {
    /// `forecast.csv` and `forecast.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            csv: dir.join(CSV_FILE_NAME),
            json: dir.join(JSON_FILE_NAME),
        }
    }
}

impl Default for OutputPaths {
    /// Relative to the current working directory.
    fn default() -> Self {
        Self {
            csv: PathBuf::from(CSV_FILE_NAME),
            json: PathBuf::from(JSON_FILE_NAME),
        }
    }
}

/// Write both export files concurrently.
///
/// Each writer runs to completion regardless of the other; if either fails,
/// the CSV error is reported first.
pub async fn write_outputs(records: &[ForecastRecord], paths: &OutputPaths) -> Result<(), ForecastError> {
    let (csv_res, json_res) = tokio::join!(
        write_file(&paths.csv, csv::to_bytes(records)),
        write_file(&paths.json, json::to_bytes(records)),
    );

    csv_res.and(json_res)
}

async fn write_file(path: &Path, contents: io::Result<Vec<u8>>) -> Result<(), ForecastError> {
    let written = match contents {
        Ok(bytes) => tokio::fs::write(path, bytes).await,
        Err(e) => Err(e),
    };

    match written {
        Ok(()) => {
            info!("Saved {}", path.display());
            Ok(())
        }
        Err(source) => {
            error!("Cannot write {}: {source}", path.display());
            Err(ForecastError::Io { path: path.to_path_buf(), source })
        }
    }
}
