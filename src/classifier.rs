use crate::league::League;
use crate::models::Player;

/// Salary releases are either tab- or space-separated; the first byte tells
/// which.
pub fn detect_separator(content: &str) -> char {
    if content.as_bytes().first() == Some(&b'\t') {
        '\t'
    } else {
        ' '
    }
}

/// Parse a currency token such as `$1,612,500.00`. Returns `None` for
/// anything that isn't a finite number once `$` and `,` are removed.
pub fn parse_amount(token: &str) -> Option<f64> {
    let stripped = token.trim_start_matches('$').replace(',', "");
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn looks_like_amount(token: &str) -> bool {
    token
        .as_bytes()
        .first()
        .is_some_and(|b| *b == b'$' || b.is_ascii_digit())
}

/// Classify every token of `line` in a single greedy pass:
/// club, then position, then amount, then name fragment.
pub fn classify_line(line: &str, sep: char, league: &League) -> Player {
    let mut player = Player::default();
    for token in line.split(sep).map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(abv) = league.clubs.abbreviation(token) {
            player.club = abv.to_string();
        } else if let Some(code) = league.positions.code(token) {
            player.position = code.to_string();
        } else if looks_like_amount(token) {
            let Some(val) = parse_amount(token) else {
                log::trace!("skipping amount token {token:?}");
                continue;
            };
            if player.base_salary == 0.0 {
                player.base_salary = val;
            } else {
                player.compensation = val;
            }
        } else {
            if !player.name.is_empty() {
                player.name.push(' ');
            }
            player.name.push_str(token);
        }
    }
    player
}

/// Classify a line and drop it if it is noise.
pub fn parse_line(line: &str, sep: char, league: &League) -> Option<Player> {
    let player = classify_line(line, sep, league);
    if player.is_noise(league.compensation_floor) {
        if !line.trim().is_empty() {
            log::debug!("no match: {player:?}");
        }
        return None;
    }
    Some(player)
}
