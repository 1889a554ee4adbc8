use std::path::PathBuf;

use colored::Colorize;

use crate::error::{MlsError, Result};
use crate::league::League;
use crate::settings::Settings;
use crate::web::{app_router, AppState};

pub fn run(addr: &str, league: League, settings: Settings) -> Result<()> {
    let data_dir = PathBuf::from(&settings.data_dir);
    let state = AppState::new(league, settings);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let local = listener.local_addr()?;
        log::info!("serving {} on {local}", data_dir.display());
        println!("Listening on {}", format!("http://{local}").bold());
        axum::serve(listener, app_router(state)).await?;
        Ok::<(), MlsError>(())
    })
}
