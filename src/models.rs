use serde::Serialize;

/// One player line from a salary data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Player {
    pub club: String,
    pub name: String,
    pub position: String,
    pub base_salary: f64,
    pub compensation: f64,
}

impl Player {
    /// Lines with no club, no position and negligible compensation are noise
    /// (headers, page footers, blank lines).
    pub fn is_noise(&self, compensation_floor: f64) -> bool {
        self.club.is_empty() && self.position.is_empty() && self.compensation < compensation_floor
    }
}

/// Total guaranteed compensation for one club.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubTotal {
    pub club: String,
    pub total: f64,
}
