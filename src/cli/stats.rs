use std::fs::File;

use crate::cli::report::text::format_stats_report;
use crate::error::Result;
use crate::stats::{get_stats_report, read_shooters, resolve_clubs};

pub fn run(file: &str, clubs: Option<&str>) -> Result<()> {
    let rows = read_shooters(File::open(file)?)?;
    let clubs = match clubs {
        Some(c) => resolve_clubs(&rows, c)?,
        None => Vec::new(),
    };
    let report = get_stats_report(rows, &clubs);
    println!("{}", format_stats_report(&report));
    Ok(())
}
