use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};

use crate::fmt::commaf;
use crate::reports::{RankedPlayer, SalaryReport};
use crate::stats::StatsReport;

/// Borderless table whose columns line up like tab-stopped text.
fn plain_table() -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table
}

fn align_right(table: &mut Table, idx: usize) {
    if let Some(col) = table.column_mut(idx) {
        col.set_cell_alignment(CellAlignment::Right);
    }
}

fn player_section(rows: &[RankedPlayer]) -> Table {
    let mut table = plain_table();
    for r in rows {
        table.add_row(vec![
            Cell::new(r.rank),
            Cell::new(&r.player.club),
            Cell::new(&r.player.position),
            Cell::new(&r.player.name),
            Cell::new(commaf(r.player.compensation)),
        ]);
    }
    align_right(&mut table, 4);
    table
}

// ---------------------------------------------------------------------------
// Pure formatting functions (report data → String)
// ---------------------------------------------------------------------------

/// Players (one block per club when grouped, separated by a blank line),
/// then the ranked club totals.
pub fn format_salary_report(report: &SalaryReport) -> String {
    if report.is_empty() {
        return "No matches found".to_string();
    }

    let mut sections: Vec<&[RankedPlayer]> = Vec::new();
    let mut start = 0;
    for (i, r) in report.players.iter().enumerate() {
        if r.section_start {
            sections.push(&report.players[start..i]);
            start = i;
        }
    }
    sections.push(&report.players[start..]);

    let mut out = sections
        .into_iter()
        .map(|rows| player_section(rows).to_string())
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut totals = plain_table();
    for (i, t) in report.club_totals.iter().enumerate() {
        totals.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&t.club),
            Cell::new(format!("total: {}", commaf(t.total))),
        ]);
    }
    out.push_str(&format!("\n\n\n{totals}"));
    out
}

pub fn format_stats_report(report: &StatsReport) -> String {
    let median = report
        .median_cost
        .map(commaf)
        .unwrap_or_else(|| "n/a".to_string());
    if report.rows.is_empty() {
        return format!("median dollars per goals+assists: {median}\nNo matches found");
    }

    let mut table = plain_table();
    for (i, r) in report.rows.iter().enumerate() {
        let cost = r
            .cost_per_contribution()
            .map(commaf)
            .unwrap_or_else(|| "\u{2014}".to_string());
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.club),
            Cell::new(&r.position),
            Cell::new(format!("{}/{}", r.goals, r.assists)),
            Cell::new(&r.name),
            Cell::new(commaf(r.compensation)),
            Cell::new(format!("({cost})")),
        ]);
    }
    align_right(&mut table, 5);
    align_right(&mut table, 6);
    format!("median dollars per goals+assists: {median}\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use crate::reports::get_salary_report;
    use crate::stats::{get_stats_report, ShooterRow};

    fn player(club: &str, name: &str, compensation: f64) -> Player {
        Player {
            club: club.to_string(),
            name: name.to_string(),
            position: "F".to_string(),
            base_salary: 0.0,
            compensation,
        }
    }

    fn words(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_grouped_report_layout() {
        let report = get_salary_report(
            vec![
                player("LAFC", "Carlos Vela", 6_300_000.0),
                player("ATL", "Josef Martinez", 4_000_000.0),
                player("LAFC", "Diego Rossi", 700_000.0),
            ],
            true,
        );
        let out = format_salary_report(&report);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(words(lines[0]), vec!["1", "ATL", "F", "Josef", "Martinez", "4,000,000.00"]);
        assert!(lines[1].trim().is_empty());
        assert_eq!(words(lines[2]), vec!["1", "LAFC", "F", "Carlos", "Vela", "6,300,000.00"]);
        assert_eq!(words(lines[3]), vec!["2", "LAFC", "F", "Diego", "Rossi", "700,000.00"]);

        let totals: Vec<&str> = lines.iter().copied().filter(|l| l.contains("total:")).collect();
        assert_eq!(words(totals[0]), vec!["1", "LAFC", "total:", "7,000,000.00"]);
        assert_eq!(words(totals[1]), vec!["2", "ATL", "total:", "4,000,000.00"]);
    }

    #[test]
    fn test_ungrouped_report_has_single_block() {
        let report = get_salary_report(
            vec![player("LAFC", "Carlos Vela", 6_300_000.0), player("ATL", "Josef Martinez", 4_000_000.0)],
            false,
        );
        let out = format_salary_report(&report);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(words(lines[0])[..2], ["1", "LAFC"]);
        assert_eq!(words(lines[1])[..2], ["2", "ATL"]);
    }

    #[test]
    fn test_empty_report() {
        let report = get_salary_report(Vec::new(), true);
        assert_eq!(format_salary_report(&report), "No matches found");
    }

    #[test]
    fn test_stats_report() {
        let rows = vec![ShooterRow {
            club: "LAFC".to_string(),
            name: "Carlos Vela".to_string(),
            position: "W".to_string(),
            goals: 34,
            assists: 15,
            compensation: 4_900_000.0,
        }];
        let out = format_stats_report(&get_stats_report(rows, &[]));
        assert!(out.starts_with("median dollars per goals+assists: 100,000.00"));
        assert!(out.contains("34/15"));
        assert!(out.contains("(100,000.00)"));
    }
}
