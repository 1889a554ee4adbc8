use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::league::League;
use crate::positions::role_of;

pub fn run(league: &League) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Role"]);
    for code in league.positions.codes() {
        table.add_row(vec![Cell::new(code), Cell::new(role_of(code).unwrap_or(""))]);
    }
    println!("{table}");
    Ok(())
}
