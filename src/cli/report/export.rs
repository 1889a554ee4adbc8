use crate::error::{MlsError, Result};
use crate::reports::SalaryReport;

pub fn to_json(report: &SalaryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One row per player; club totals are left to the consumer.
pub fn to_csv(report: &SalaryReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["rank", "club", "position", "name", "base_salary", "compensation"])?;
    for r in &report.players {
        wtr.write_record([
            r.rank.to_string(),
            r.player.club.clone(),
            r.player.position.clone(),
            r.player.name.clone(),
            format!("{:.2}", r.player.base_salary),
            format!("{:.2}", r.player.compensation),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| MlsError::Other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
