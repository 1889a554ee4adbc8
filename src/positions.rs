use crate::error::{MlsError, Result};

/// Position codes as they appear in salary releases. Older releases use the
/// short hyphenated codes; newer ones spell the role out.
const POSITION_CODES: &[&str] = &[
    "F",
    "M-F",
    "F-M",
    "F/M",
    "GK",
    "D",
    "D-M",
    "M-D",
    "M",
    "M/F",
    "CENTER-BACK",
    "DEFENSIVE MIDFIELD",
    "RIGHT WING",
    "CENTRAL MIDFIELD",
    "CENTER FORWARD",
    "RIGHT-BACK",
    "ATTACKING MIDFIELD",
    "GOALKEEPER",
    "LEFT-BACK",
    "LEFT WING",
    "RIGHT MIDFIELD",
    "LEFT MIDFIELD",
    "MIDFIELDER",
    "FORWARD",
    "DEFENDER",
];

/// Role names and every code or spelling that means the same role.
const ROLES: &[(&str, &[&str])] = &[
    ("Center Forward", &["CENTER FORWARD", "F", "FORWARD"]),
    ("Left Wing", &["LEFT WING", "LW"]),
    ("Right Wing", &["RIGHT WING", "RW"]),
    (
        "Attacking Midfield",
        &["ATTACKING MIDFIELD", "F-M", "F/M", "M-F", "M/F", "AM"],
    ),
    ("Central Midfield", &["CENTRAL MIDFIELD", "M", "MF", "MIDFIELDER", "CM"]),
    (
        "Defensive Midfield",
        &["DEFENSIVE MIDFIELD", "D-M", "M-D", "D/M", "M/D", "DM"],
    ),
    ("Left Midfield", &["LEFT MIDFIELD", "LM"]),
    ("Right Midfield", &["RIGHT MIDFIELD", "RM"]),
    ("Left-back", &["LEFT-BACK", "LB"]),
    ("Center-back", &["CENTER-BACK", "D", "DEFENDER", "CB"]),
    ("Right-back", &["RIGHT-BACK", "RB"]),
    ("Goalkeeper", &["GOALKEEPER", "GK"]),
    ("Substitute", &["SUBSTITUTE"]),
];

/// Closed set of position codes the classifier recognizes.
#[derive(Debug, Clone)]
pub struct Positions {
    codes: Vec<&'static str>,
}

impl Default for Positions {
    fn default() -> Self {
        Self {
            codes: POSITION_CODES.to_vec(),
        }
    }
}

impl Positions {
    /// Canonical (upper-case) form of `token` if it is a known code.
    pub fn code(&self, token: &str) -> Option<&'static str> {
        let upper = token.trim().to_uppercase();
        self.codes.iter().copied().find(|c| *c == upper)
    }

    pub fn codes(&self) -> &[&'static str] {
        &self.codes
    }

    /// Expand user input into the set of codes it selects. A role alias such
    /// as `forward` or `LW` selects every known code of that role.
    pub fn expand(&self, input: &str) -> Result<Vec<&'static str>> {
        let upper = input.trim().to_uppercase();
        let mut selected: Vec<&'static str> = Vec::new();
        if let Some(code) = self.code(&upper) {
            selected.push(code);
        }
        if let Some(role) = role_of(&upper) {
            for code in self.codes.iter().copied() {
                if role_of(code) == Some(role) && !selected.contains(&code) {
                    selected.push(code);
                }
            }
        }
        if selected.is_empty() {
            return Err(MlsError::UnknownPosition {
                name: input.trim().to_string(),
                valid: self.codes.join(", "),
            });
        }
        Ok(selected)
    }
}

/// Role name for a position code or spelling, e.g. `D-M` -> Defensive Midfield.
pub fn role_of(code: &str) -> Option<&'static str> {
    let upper = code.trim().to_uppercase();
    ROLES
        .iter()
        .find(|(_, aliases)| aliases.contains(&upper.as_str()))
        .map(|(role, _)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_case_insensitive() {
        let p = Positions::default();
        assert_eq!(p.code("gk"), Some("GK"));
        assert_eq!(p.code("m/f"), Some("M/F"));
        assert_eq!(p.code("Center Forward"), Some("CENTER FORWARD"));
        assert_eq!(p.code("Vela"), None);
    }

    #[test]
    fn test_role_of() {
        assert_eq!(role_of("F"), Some("Center Forward"));
        assert_eq!(role_of("m-d"), Some("Defensive Midfield"));
        assert_eq!(role_of("CB"), Some("Center-back"));
        assert_eq!(role_of("Substitute"), Some("Substitute"));
        assert_eq!(role_of("Bench"), None);
    }

    #[test]
    fn test_expand_role_alias() {
        let p = Positions::default();
        let fwd = p.expand("forward").unwrap();
        assert!(fwd.contains(&"F"));
        assert!(fwd.contains(&"FORWARD"));
        assert!(fwd.contains(&"CENTER FORWARD"));
        assert!(!fwd.contains(&"M"));

        let am = p.expand("AM").unwrap();
        assert!(am.contains(&"M-F"));
        assert!(am.contains(&"F/M"));
    }

    #[test]
    fn test_expand_unknown() {
        let p = Positions::default();
        let err = p.expand("striker").unwrap_err();
        assert!(err.to_string().contains("valid positions"));
    }
}
