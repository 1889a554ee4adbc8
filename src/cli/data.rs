use std::path::PathBuf;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::loader::list_data_files;
use crate::settings::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let dir = PathBuf::from(&settings.data_dir);
    let files = list_data_files(&dir)?;
    if files.is_empty() {
        println!("No data files in {}.", dir.display());
        println!("Run `mls load <dir>` to point at a directory of *_data files.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["File", "Release"]);
    for f in &files {
        table.add_row(vec![Cell::new(&f.name), Cell::new(f.label())]);
    }
    println!("Data files in {}\n{table}", dir.display());
    Ok(())
}
