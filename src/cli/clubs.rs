use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::league::League;

pub fn run(league: &League) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Club", "Recognized as"]);
    for abv in league.clubs.abbreviations() {
        table.add_row(vec![
            Cell::new(abv.bold()),
            Cell::new(league.clubs.names_for(abv).join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}
