use std::path::PathBuf;

use crate::error::Result;
use crate::fmt::money;
use crate::loader::list_data_files;
use crate::settings::{settings_path, Settings};

pub fn run(settings: &Settings) -> Result<()> {
    let data_dir = PathBuf::from(&settings.data_dir);
    let settings_file = settings_path();

    println!(
        "Settings:     {}{}",
        settings_file.display(),
        if settings_file.exists() { "" } else { " (defaults)" }
    );
    println!("Data dir:     {}", data_dir.display());
    println!("Noise floor:  {}", money(settings.compensation_floor));
    println!("DP threshold: {}", money(settings.designated_threshold));
    if !settings.extra_clubs.is_empty() {
        println!("Extra clubs:  {}", settings.extra_clubs.len());
    }

    let files = list_data_files(&data_dir)?;
    println!();
    match files.first() {
        Some(newest) => {
            println!("Data files:   {}", files.len());
            println!("Newest:       {} ({})", newest.name, newest.label());
        }
        None => println!("No data files found. Run `mls load <dir>` to set up."),
    }
    Ok(())
}
