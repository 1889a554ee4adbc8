use std::io::Read;

use serde::Serialize;

use crate::error::{MlsError, Result};

// Columns of the shooter table export.
const COL_PLAYER: usize = 2;
const COL_TEAM: usize = 3;
const COL_POS: usize = 6;
const COL_GOALS: usize = 11;
const COL_ASSISTS: usize = 17;
const COL_COMP_K: usize = 27;

/// Positions left out of the median: their job isn't scoring.
const NON_ATTACKING: &[&str] = &["CDM", "CB", "GK"];

#[derive(Debug, Clone, Serialize)]
pub struct ShooterRow {
    pub club: String,
    pub name: String,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    pub compensation: f64,
}

impl ShooterRow {
    pub fn contributions(&self) -> u64 {
        u64::from(self.goals) + u64::from(self.assists)
    }

    /// Compensation per goal or assist; `None` without any.
    pub fn cost_per_contribution(&self) -> Option<f64> {
        match self.contributions() {
            0 => None,
            n => Some(self.compensation / n as f64),
        }
    }
}

pub struct StatsReport {
    pub rows: Vec<ShooterRow>,
    pub median_cost: Option<f64>,
}

/// Read the shooter table. The first record is a header.
pub fn read_shooters<R: Read>(reader: R) -> Result<Vec<ShooterRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() <= COL_COMP_K {
            return Err(MlsError::Other(format!(
                "shooter table row {} has {} columns, expected at least {}",
                i + 2,
                record.len(),
                COL_COMP_K + 1
            )));
        }
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();
        rows.push(ShooterRow {
            club: field(COL_TEAM).to_string(),
            name: field(COL_PLAYER).to_string(),
            position: field(COL_POS).to_string(),
            goals: field(COL_GOALS).parse().unwrap_or(0),
            assists: field(COL_ASSISTS).parse().unwrap_or(0),
            compensation: field(COL_COMP_K).parse::<f64>().unwrap_or(0.0) * 1000.0,
        });
    }
    Ok(rows)
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let half = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[half - 1] + values[half]) / 2.0)
    } else {
        Some(values[half])
    }
}

/// Validate a club filter against the clubs present in the table.
pub fn resolve_clubs(rows: &[ShooterRow], input: &str) -> Result<Vec<String>> {
    let mut known: Vec<&str> = rows.iter().map(|r| r.club.as_str()).collect();
    known.sort();
    known.dedup();

    let mut clubs = Vec::new();
    for club in input.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let Some(found) = known.iter().find(|k| k.eq_ignore_ascii_case(club)) else {
            return Err(MlsError::UnknownClub {
                name: club.to_string(),
                valid: known.join(", "),
            });
        };
        clubs.push(found.to_string());
    }
    Ok(clubs)
}

/// Cheapest goal contributions first. Ties fall back to more contributions,
/// then higher compensation.
pub fn get_stats_report(mut rows: Vec<ShooterRow>, clubs: &[String]) -> StatsReport {
    if !clubs.is_empty() {
        rows.retain(|r| clubs.contains(&r.club));
    }

    let mut costs: Vec<f64> = rows
        .iter()
        .filter(|r| !NON_ATTACKING.contains(&r.position.as_str()))
        .filter_map(ShooterRow::cost_per_contribution)
        .filter(|c| *c > 0.0)
        .collect();
    let median_cost = median(&mut costs);

    rows.sort_by(|a, b| b.compensation.total_cmp(&a.compensation));
    rows.sort_by(|a, b| b.contributions().cmp(&a.contributions()));
    rows.sort_by(|a, b| match (a.cost_per_contribution(), b.cost_per_contribution()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    StatsReport { rows, median_cost }
}
