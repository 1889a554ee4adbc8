pub mod export;
pub mod text;

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::{OutputFormat, ReportArgs};
use crate::error::Result;
use crate::filter::Filter;
use crate::league::League;
use crate::loader::{read_players, resolve_data_file};
use crate::reports::{get_salary_report, SalaryReport};
use crate::settings::Settings;

pub fn run(args: &ReportArgs, league: &League, settings: &Settings) -> Result<()> {
    let filter = Filter::parse(
        league,
        args.clubs.as_deref(),
        args.pos.as_deref(),
        args.players.as_deref(),
        args.dp,
    )?;
    if !filter.is_empty() {
        log::debug!("filter: {filter:?}");
    }

    let path = resolve_data_file(args.data.as_deref(), &PathBuf::from(&settings.data_dir))?;
    let players = read_players(&path, league, &filter)?;
    let report = get_salary_report(players, !args.no_sort);

    if report.is_empty() && args.format == OutputFormat::Table && args.output.is_none() {
        println!("{}", "No matches found".yellow());
        return Ok(());
    }

    let rendered = render(&report, args.format)?;
    match &args.output {
        Some(out) => {
            let p = PathBuf::from(out);
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&p, &rendered)?;
            println!("Wrote {}", p.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

pub(crate) fn render(report: &SalaryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!("{}\n", text::format_salary_report(report))),
        OutputFormat::Csv => export::to_csv(report),
        OutputFormat::Json => export::to_json(report).map(|s| format!("{s}\n")),
    }
}
