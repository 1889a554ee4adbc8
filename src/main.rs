mod classifier;
mod cli;
mod clubs;
mod error;
mod filter;
mod fmt;
mod league;
mod loader;
mod models;
mod positions;
mod reports;
mod settings;
mod stats;
#[cfg(feature = "web")]
mod web;

use clap::Parser;

use cli::{Cli, Commands};
use league::League;

fn init_logging(debug: bool) {
    let default_filter = if debug { "mls=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let settings = settings::load_settings();
    let league = League::from_settings(&settings);

    let result = match cli.command {
        None => cli::report::run(&cli::ReportArgs::default(), &league, &settings),
        Some(Commands::Report(args)) => cli::report::run(&args, &league, &settings),
        Some(Commands::Stats { file, clubs }) => cli::stats::run(&file, clubs.as_deref()),
        Some(Commands::Clubs) => cli::clubs::run(&league),
        Some(Commands::Positions) => cli::positions::run(&league),
        Some(Commands::Data) => cli::data::run(&settings),
        Some(Commands::Load { path }) => cli::load::run(&path),
        Some(Commands::Status) => cli::status::run(&settings),
        Some(Commands::Completions { shell }) => cli::completions::run(shell),
        #[cfg(feature = "web")]
        Some(Commands::Serve { addr }) => cli::serve::run(&addr, league, settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
