use std::path::PathBuf;

use crate::error::{MlsError, Result};
use crate::loader::list_data_files;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));

    if !resolved.is_dir() {
        return Err(MlsError::Settings(format!(
            "No directory at {}",
            resolved.display()
        )));
    }
    let files = list_data_files(&resolved)?;
    if files.is_empty() {
        log::warn!("no *_data files in {}", resolved.display());
    }

    let mut settings = load_settings();
    settings.data_dir = resolved.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Switched to {} ({} data files)", resolved.display(), files.len());
    Ok(())
}
