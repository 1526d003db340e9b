//! Output file layout and writing.

use crate::constants::{DEFAULT_OUTPUT_ROOT, OUTPUT_EXTENSION, OUTPUT_TIMESTAMP_FORMAT};
use crate::error::Result;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Path of the file for one sounding
///
/// `<output_dir>/yyyymmdd_hhmm_<station_id>.txt`, where the directory
/// defaults to `radiosoundings/<station_name>`.
pub fn output_path(
    output_dir: Option<&Path>,
    station_id: &str,
    station_name: &str,
    when: NaiveDateTime,
) -> PathBuf {
    let base_dir = match output_dir {
        Some(dir) if !dir.as_os_str().to_string_lossy().trim().is_empty() => dir.to_path_buf(),
        _ => Path::new(DEFAULT_OUTPUT_ROOT).join(station_name),
    };

    let file_name = format!(
        "{}_{}.{}",
        when.format(OUTPUT_TIMESTAMP_FORMAT),
        station_id,
        OUTPUT_EXTENSION
    );
    base_dir.join(file_name)
}

/// Write a converted sounding, creating parent directories as needed
pub async fn write_sounding(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    fs::write(path, text).await?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
