use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::classifier::{detect_separator, parse_line};
use crate::error::{MlsError, Result};
use crate::filter::Filter;
use crate::league::League;
use crate::models::Player;

const DATA_SUFFIX: &str = "_data";

// ---------------------------------------------------------------------------
// Data files
// ---------------------------------------------------------------------------

/// A salary release in the data directory, e.g. `2024_04_25_data`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFile {
    pub name: String,
    pub path: PathBuf,
    pub date: Option<NaiveDate>,
}

impl DataFile {
    fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let stem = name.strip_suffix(DATA_SUFFIX)?;
        let date = NaiveDate::parse_from_str(stem, "%Y_%m_%d").ok();
        Some(Self { name, path, date })
    }

    /// `2024_04_25_data` -> `2024-04-25`; anything else loses the suffix and
    /// underscores.
    pub fn label(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => self
                .name
                .strip_suffix(DATA_SUFFIX)
                .unwrap_or(&self.name)
                .replace('_', " "),
        }
    }
}

/// Data files in `dir`, newest first. Dated files sort ahead of undated ones.
pub fn list_data_files(dir: &Path) -> Result<Vec<DataFile>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<DataFile> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(DataFile::from_path)
        .collect();
    files.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.name.cmp(&a.name)));
    Ok(files)
}

/// Find the file to read: an explicit path, a name inside the data directory,
/// or the newest release in the data directory.
pub fn resolve_data_file(data: Option<&str>, data_dir: &Path) -> Result<PathBuf> {
    match data {
        Some(name) => {
            let direct = PathBuf::from(name);
            if direct.is_file() {
                return Ok(direct);
            }
            let in_dir = data_dir.join(name);
            if in_dir.is_file() {
                return Ok(in_dir);
            }
            Err(MlsError::DataFileNotFound(format!(
                "{name} (also looked in {})",
                data_dir.display()
            )))
        }
        None => list_data_files(data_dir)?
            .into_iter()
            .next()
            .map(|f| f.path)
            .ok_or_else(|| {
                MlsError::DataFileNotFound(format!(
                    "no *{DATA_SUFFIX} files in {}; pass --data or run `mls load <dir>`",
                    data_dir.display()
                ))
            }),
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Classify every line of `content` and keep the players `filter` accepts,
/// in file order.
pub fn parse_players(content: &str, league: &League, filter: &Filter) -> Vec<Player> {
    let sep = detect_separator(content);
    log::debug!("separator: {:?}", sep);

    let mut players = Vec::new();
    for line in content.lines() {
        let Some(player) = parse_line(line, sep, league) else {
            continue;
        };
        if !filter.accepts(&player) {
            continue;
        }
        if player.club.is_empty() {
            log::debug!("no club: {player:?}");
        }
        if player.position.is_empty() {
            log::debug!("no pos: {player:?}");
        }
        if player.compensation < league.compensation_floor {
            log::debug!("no compensation: {player:?}");
        }
        players.push(player);
    }
    players
}

pub fn read_players(path: &Path, league: &League, filter: &Filter) -> Result<Vec<Player>> {
    log::info!("reading {}", path.display());
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_players(&content, league, filter))
}
