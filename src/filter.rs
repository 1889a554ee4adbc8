use crate::error::Result;
use crate::league::League;
use crate::models::Player;

/// Optional allow-lists applied to every classified player. An empty list
/// places no constraint on that dimension.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub clubs: Vec<String>,
    pub positions: Vec<String>,
    pub players: Vec<String>,
    /// Minimum compensation when only designated players are wanted.
    pub designated: Option<f64>,
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl Filter {
    /// Build a filter from comma-separated user input, rejecting unknown
    /// clubs and positions.
    pub fn parse(
        league: &League,
        clubs: Option<&str>,
        positions: Option<&str>,
        players: Option<&str>,
        designated_only: bool,
    ) -> Result<Self> {
        let mut filter = Filter::default();
        for club in clubs.into_iter().flat_map(split_list) {
            let abv = league.clubs.resolve(club)?;
            if !filter.clubs.contains(&abv) {
                filter.clubs.push(abv);
            }
        }
        for pos in positions.into_iter().flat_map(split_list) {
            for code in league.positions.expand(pos)? {
                if !filter.positions.iter().any(|p| p == code) {
                    filter.positions.push(code.to_string());
                }
            }
        }
        filter.players = players
            .into_iter()
            .flat_map(split_list)
            .map(str::to_lowercase)
            .collect();
        if designated_only {
            filter.designated = Some(league.designated_threshold);
        }
        Ok(filter)
    }

    /// Like [`Filter::parse`] but skips entries that don't resolve. Used for
    /// free-form web input.
    pub fn parse_lenient(
        league: &League,
        clubs: &str,
        positions: &str,
        players: &str,
        designated_only: bool,
    ) -> Self {
        let mut filter = Filter::default();
        for club in split_list(clubs) {
            for abv in league.clubs.search(club) {
                if !filter.clubs.contains(&abv) {
                    filter.clubs.push(abv);
                }
            }
        }
        for pos in split_list(positions) {
            if let Ok(codes) = league.positions.expand(pos) {
                for code in codes {
                    if !filter.positions.iter().any(|p| p == code) {
                        filter.positions.push(code.to_string());
                    }
                }
            }
        }
        filter.players = split_list(players).map(str::to_lowercase).collect();
        if designated_only {
            filter.designated = Some(league.designated_threshold);
        }
        filter
    }

    pub fn accepts(&self, player: &Player) -> bool {
        if !self.clubs.is_empty() && !self.clubs.iter().any(|c| *c == player.club) {
            return false;
        }
        if !self.positions.is_empty()
            && !self.positions.iter().any(|p| p.eq_ignore_ascii_case(&player.position))
        {
            return false;
        }
        if !self.players.is_empty() {
            let name = player.name.to_lowercase();
            if !self.players.iter().any(|p| name.contains(p.as_str())) {
                return false;
            }
        }
        if let Some(threshold) = self.designated {
            if player.compensation < threshold {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
            && self.positions.is_empty()
            && self.players.is_empty()
            && self.designated.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(club: &str, name: &str, position: &str, compensation: f64) -> Player {
        Player {
            club: club.to_string(),
            name: name.to_string(),
            position: position.to_string(),
            base_salary: compensation,
            compensation,
        }
    }

    fn sample() -> Vec<Player> {
        vec![
            player("LAFC", "Carlos Vela", "F", 6_300_000.0),
            player("LAFC", "Diego Rossi", "F", 700_000.0),
            player("ATL", "Josef Martinez", "F", 4_000_000.0),
            player("ATL", "Brad Guzan", "GK", 900_000.0),
            player("TOR", "Michael Bradley", "M", 6_500_000.0),
            player("", "Pool Keeper", "GK", 70_000.0),
        ]
    }

    #[test]
    fn test_empty_filter_accepts_all() {
        let f = Filter::default();
        assert!(f.is_empty());
        assert!(sample().iter().all(|p| f.accepts(p)));
    }

    #[test]
    fn test_club_filter_resolves_aliases() {
        let league = League::default();
        let f = Filter::parse(&league, Some("Atlanta United, lafc"), None, None, false).unwrap();
        assert_eq!(f.clubs, vec!["ATL", "LAFC"]);
        let kept: Vec<_> = sample().into_iter().filter(|p| f.accepts(p)).collect();
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn test_unknown_club_rejected() {
        let league = League::default();
        assert!(Filter::parse(&league, Some("ATL,Nowhere FC"), None, None, false).is_err());
    }

    #[test]
    fn test_player_substring_case_insensitive() {
        let league = League::default();
        let f = Filter::parse(&league, None, None, Some("vela, BRADLEY"), false).unwrap();
        let kept: Vec<_> = sample().into_iter().filter(|p| f.accepts(p)).collect();
        let names: Vec<_> = kept.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Carlos Vela", "Michael Bradley"]);
    }

    #[test]
    fn test_position_role_alias() {
        let league = League::default();
        let f = Filter::parse(&league, None, Some("goalkeeper"), None, false).unwrap();
        let kept: Vec<_> = sample().into_iter().filter(|p| f.accepts(p)).collect();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_designated_threshold() {
        let league = League::default();
        let f = Filter::parse(&league, None, None, None, true).unwrap();
        assert_eq!(f.designated, Some(1_612_500.0));
        let kept: Vec<_> = sample().into_iter().filter(|p| f.accepts(p)).collect();
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_adding_dimension_never_increases_matches() {
        let league = League::default();
        let players = sample();
        let count = |f: &Filter| players.iter().filter(|p| f.accepts(p)).count();

        let base = Filter::parse(&league, Some("LAFC,ATL"), None, None, false).unwrap();
        let with_pos = Filter::parse(&league, Some("LAFC,ATL"), Some("F"), None, false).unwrap();
        let with_dp = Filter::parse(&league, Some("LAFC,ATL"), Some("F"), None, true).unwrap();
        let with_name = Filter::parse(&league, Some("LAFC,ATL"), Some("F"), Some("vela"), true).unwrap();

        assert!(count(&with_pos) <= count(&base));
        assert!(count(&with_dp) <= count(&with_pos));
        assert!(count(&with_name) <= count(&with_dp));
        assert_eq!(count(&with_name), 1);
    }

    #[test]
    fn test_lenient_ignores_unknown() {
        let league = League::default();
        let f = Filter::parse_lenient(&league, "LA Galaxy (LA), Nowhere", "striker,GK", "", false);
        assert_eq!(f.clubs, vec!["LA"]);
        assert_eq!(f.positions, vec!["GK", "GOALKEEPER"]);
    }
}
