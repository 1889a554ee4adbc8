use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::error::{MlsError, Result};
use crate::filter::Filter;
use crate::fmt::commaf;
use crate::league::League;
use crate::loader::{list_data_files, read_players, resolve_data_file};
use crate::reports::{get_salary_report, SalaryReport};
use crate::settings::Settings;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    league: Arc<League>,
    settings: Arc<Settings>,
}

impl AppState {
    pub fn new(league: League, settings: Settings) -> Self {
        Self {
            league: Arc::new(league),
            settings: Arc::new(settings),
        }
    }

    fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.data_dir)
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/filter", get(filter_query).post(filter_form))
        .route("/players", get(players))
        .with_state(state)
}

impl IntoResponse for MlsError {
    fn into_response(self) -> Response {
        let status = match self {
            MlsError::DataFileNotFound(_)
            | MlsError::UnknownClub { .. }
            | MlsError::UnknownPosition { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::warn!("{status}: {self}");
        (status, self.to_string()).into_response()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only files listed in the data directory may be read over HTTP.
fn data_file(data_dir: &Path, name: &str) -> Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return resolve_data_file(None, data_dir);
    }
    list_data_files(data_dir)?
        .into_iter()
        .find(|f| f.name == name)
        .map(|f| f.path)
        .ok_or_else(|| MlsError::DataFileNotFound(name.to_string()))
}

fn player_names(state: &AppState, data: &str) -> Result<Vec<String>> {
    let path = data_file(&state.data_dir(), data)?;
    let names: BTreeSet<String> = read_players(&path, &state.league, &Filter::default())?
        .into_iter()
        .map(|p| p.name)
        .filter(|n| !n.is_empty())
        .collect();
    Ok(names.into_iter().collect())
}

/// Datalist options for the index page. An unreadable file leaves the list
/// empty instead of failing the page.
fn player_options(state: &AppState, data: &str) -> String {
    match player_names(state, data) {
        Ok(names) => options(names),
        Err(e) => {
            log::warn!("no player list for {data}: {e}");
            String::new()
        }
    }
}

fn options<I: IntoIterator<Item = S>, S: AsRef<str>>(values: I) -> String {
    values
        .into_iter()
        .map(|v| format!("<option value=\"{}\">", escape(v.as_ref())))
        .collect()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub data: String,
    pub clubs: String,
    pub players: String,
    pub positions: String,
    /// Checkbox: present when ticked.
    pub sort: Option<String>,
    pub dp: Option<String>,
}

async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let files = list_data_files(&state.data_dir())?;
    let data_options: String = files
        .iter()
        .enumerate()
        .map(|(i, f)| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape(&f.name),
                if i == 0 { " selected" } else { "" },
                escape(&f.label())
            )
        })
        .collect();
    let player_options = match files.first() {
        Some(f) => player_options(&state, &f.name),
        None => String::new(),
    };
    let club_options = options(state.league.clubs.labels());
    let position_options = options(state.league.positions.codes());

    Ok(Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>MLS Compensation</title>
<script src="https://unpkg.com/htmx.org@1.9.2"></script>
<style>
  body {{ font-family: sans-serif; margin: 2rem; }}
  label {{ display: block; margin-top: 1rem; }}
  table {{ border-collapse: collapse; margin-top: 1rem; }}
  th, td {{ padding: 0.4rem; border: 1px solid #ccc; }}
  td.amount {{ text-align: right; }}
</style>
</head>
<body>
<h1>MLS Compensation</h1>
<form method="post" action="/filter" hx-post="/filter" hx-target="#results" hx-trigger="load, change delay:500ms">
  <label>Data file
    <select name="data" hx-get="/players" hx-target="#players-list" hx-trigger="change">{data_options}</select>
  </label>
  <label>Clubs <input type="text" name="clubs" list="clubs-list" placeholder="ATL, LA Galaxy (LA)"></label>
  <datalist id="clubs-list">{club_options}</datalist>
  <label>Players <input type="text" name="players" list="players-list" placeholder="comma separated"></label>
  <datalist id="players-list">{player_options}</datalist>
  <label>Positions <input type="text" name="positions" list="positions-list" placeholder="F, GK"></label>
  <datalist id="positions-list">{position_options}</datalist>
  <label><input type="checkbox" name="sort" checked> Sort by club</label>
  <label><input type="checkbox" name="dp"> Only designated players (compensation &ge; ${threshold})</label>
  <noscript><button type="submit">Filter</button></noscript>
</form>
<div id="results"></div>
</body>
</html>
"##,
        threshold = commaf(state.league.designated_threshold),
    )))
}

async fn filter_query(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Html<String>> {
    blocking(move || run_filter(&state, &params)).await
}

async fn filter_form(
    State(state): State<AppState>,
    Form(params): Form<FilterParams>,
) -> Result<Html<String>> {
    blocking(move || run_filter(&state, &params)).await
}

/// File reads run on the blocking pool, off the async workers.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| MlsError::Other(format!("request task failed: {e}")))?
}

fn run_filter(state: &AppState, params: &FilterParams) -> Result<Html<String>> {
    let filter = Filter::parse_lenient(
        &state.league,
        &params.clubs,
        &params.positions,
        &params.players,
        params.dp.is_some(),
    );
    let path = data_file(&state.data_dir(), &params.data)?;
    let players = read_players(&path, &state.league, &filter)?;
    let report = get_salary_report(players, params.sort.is_some());
    Ok(Html(render_results(&report)))
}

#[derive(Debug, Deserialize)]
pub struct PlayersParams {
    data: Option<String>,
}

async fn players(
    State(state): State<AppState>,
    Query(params): Query<PlayersParams>,
) -> Response {
    let Some(data) = params.data.filter(|d| !d.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing data parameter").into_response();
    };
    match blocking(move || player_names(&state, &data)).await {
        Ok(names) => Html(options(names)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Players table (blank row between club sections) followed by club totals.
pub fn render_results(report: &SalaryReport) -> String {
    let mut out = String::from(
        "<h2>Players</h2>\n<table>\n<thead><tr><th>#</th><th>Club</th><th>Pos</th><th>Name</th><th>Compensation</th></tr></thead>\n<tbody>\n",
    );
    if report.is_empty() {
        out.push_str("<tr><td colspan=\"5\">No matches found</td></tr>\n");
    }
    for r in &report.players {
        if r.section_start {
            out.push_str("<tr><td colspan=\"5\">&nbsp;</td></tr>\n");
        }
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>\n",
            r.rank,
            escape(&r.player.club),
            escape(&r.player.position),
            escape(&r.player.name),
            commaf(r.player.compensation)
        ));
    }
    out.push_str("</tbody>\n</table>\n");

    out.push_str(
        "<h2>Club Totals</h2>\n<table>\n<thead><tr><th>#</th><th>Club</th><th>Total Compensation</th></tr></thead>\n<tbody>\n",
    );
    for (i, t) in report.club_totals.iter().enumerate() {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>\n",
            i + 1,
            escape(&t.club),
            commaf(t.total)
        ));
    }
    out.push_str("</tbody>\n</table>\n");
    out.push_str(&format!(
        "<p>League total: {}</p>\n",
        commaf(report.total_compensation())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    const DATA: &str = "\
ATL Martinez Josef F $3,600,000.00 $4,000,000.00
ATL Guzan Brad GK $800,000.00 $900,000.00
LAFC Vela Carlos F $4,500,000.00 $6,300,000.00
LAFC Rossi <Diego> F $600,000.00 $700,000.00
";

    fn test_app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2018_09_15_data"), DATA).unwrap();
        std::fs::write(dir.path().join("2017_04_01_data"), "TOR Bradley Michael M $1 $6,500,000\n").unwrap();
        let settings = Settings {
            data_dir: dir.path().to_string_lossy().to_string(),
            ..Settings::default()
        };
        let state = AppState::new(League::from_settings(&settings), settings);
        (dir, app_router(state))
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_lists_data_files_newest_first() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let newest = body.find("2018-09-15").unwrap();
        let older = body.find("2017-04-01").unwrap();
        assert!(newest < older);
        assert!(body.contains("<option value=\"Martinez Josef\">"));
        assert!(body.contains("LA Galaxy (LA)"));
    }

    #[tokio::test]
    async fn filter_groups_and_escapes() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/filter?data=2018_09_15_data&sort=on")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("&nbsp;"));
        assert!(body.contains("Rossi &lt;Diego&gt;"));
        assert!(body.contains("7,000,000.00"));
        assert!(body.contains("4,900,000.00"));
        assert!(body.contains("League total: 11,900,000.00"));
    }

    #[tokio::test]
    async fn filter_form_applies_filters() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/filter")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("data=2018_09_15_data&clubs=Atlanta+United+%28ATL%29&positions=&players=&dp=on"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Martinez Josef"));
        assert!(!body.contains("Guzan"));
        assert!(!body.contains("Vela"));
        assert!(!body.contains("&nbsp;"));
    }

    #[tokio::test]
    async fn filter_rejects_unlisted_file() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/filter?data=..%2F..%2Fetc%2Fpasswd")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn player_list_falls_back_to_empty() {
        let (dir, _app) = test_app();
        let settings = Settings {
            data_dir: dir.path().to_string_lossy().to_string(),
            ..Settings::default()
        };
        let state = AppState::new(League::from_settings(&settings), settings);
        assert_eq!(player_options(&state, "1999_01_01_data"), "");
        assert!(player_options(&state, "2017_04_01_data").contains("Bradley Michael"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn filter_reads_on_blocking_pool() {
        let (_dir, app) = test_app();
        let response = tokio::spawn(async move {
            app.oneshot(
                Request::builder()
                    .uri("/filter?data=2017_04_01_data")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
        })
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Bradley Michael"));
    }

    #[tokio::test]
    async fn players_requires_data() {
        let (_dir, app) = test_app();
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/players").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/players?data=2017_04_01_data")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<option value=\"Bradley Michael\">");
    }
}
