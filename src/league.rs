use crate::clubs::Clubs;
use crate::positions::Positions;
use crate::settings::Settings;

/// Lookup tables and thresholds for one run. Built once at startup and
/// passed by reference to the classifier, filters and reports.
#[derive(Debug, Clone)]
pub struct League {
    pub clubs: Clubs,
    pub positions: Positions,
    pub compensation_floor: f64,
    pub designated_threshold: f64,
}

impl Default for League {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl League {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            clubs: Clubs::with_extra(&settings.extra_clubs),
            positions: Positions::default(),
            compensation_floor: settings.compensation_floor,
            designated_threshold: settings.designated_threshold,
        }
    }
}
