use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ClubTotal, Player};

// ---------------------------------------------------------------------------
// Salary report
// ---------------------------------------------------------------------------

/// A player row with its rank inside the listing (or inside its club section
/// when grouped).
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    /// First row of a new club section (never set on the first row overall).
    #[serde(skip)]
    pub section_start: bool,
    #[serde(flatten)]
    pub player: Player,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryReport {
    pub players: Vec<RankedPlayer>,
    pub club_totals: Vec<ClubTotal>,
    pub grouped: bool,
}

impl SalaryReport {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn total_compensation(&self) -> f64 {
        self.club_totals.iter().map(|c| c.total).sum()
    }
}

/// Highest compensation first; then, if `by_club`, a stable sort into club
/// sections so each section keeps the compensation order.
pub fn sort_players(players: &mut [Player], by_club: bool) {
    players.sort_by(|a, b| b.compensation.total_cmp(&a.compensation));
    if by_club {
        players.sort_by(|a, b| a.club.cmp(&b.club));
    }
}

/// Sum compensation per club, largest total first. Equal totals keep club
/// code order.
pub fn club_totals(players: &[Player]) -> Vec<ClubTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for p in players {
        *sums.entry(p.club.as_str()).or_insert(0.0) += p.compensation;
    }
    let mut totals: Vec<ClubTotal> = sums
        .into_iter()
        .map(|(club, total)| ClubTotal {
            club: club.to_string(),
            total,
        })
        .collect();
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

pub fn get_salary_report(mut players: Vec<Player>, by_club: bool) -> SalaryReport {
    let club_totals = club_totals(&players);
    sort_players(&mut players, by_club);

    let mut ranked = Vec::with_capacity(players.len());
    let mut rank = 1;
    let mut last_club: Option<String> = None;
    for player in players {
        let mut section_start = false;
        if by_club {
            if let Some(last) = &last_club {
                if *last != player.club {
                    rank = 1;
                    section_start = true;
                }
            }
            last_club = Some(player.club.clone());
        }
        ranked.push(RankedPlayer {
            rank,
            section_start,
            player,
        });
        rank += 1;
    }

    SalaryReport {
        players: ranked,
        club_totals,
        grouped: by_club,
    }
}
