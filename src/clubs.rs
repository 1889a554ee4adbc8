use std::collections::BTreeMap;

use crate::error::{MlsError, Result};

/// Full names and alternate spellings, each mapped to the club's canonical
/// abbreviation. Abbreviations resolve to themselves.
const CLUB_ALIASES: &[(&str, &str)] = &[
    ("Pool", "MLS"),
    ("MLS Pool", "MLS"),
    ("Major League Soccer", "MLS"),
    ("Retired", "MLS"),
    ("New England Revolution", "NE"),
    ("Orlando City SC", "ORL"),
    ("San Jose Earthquakes", "SJ"),
    ("Vancouver Whitecaps", "VAN"),
    ("Columbus Crew", "CLB"),
    ("DC United", "DC"),
    ("Minnesota United", "MNUFC"),
    ("Seattle Sounders FC", "SEA"),
    ("Chicago Fire", "CHI"),
    ("Colorado Rapids", "COL"),
    ("FC Dallas", "DAL"),
    ("Sporting Kansas City", "KC"),
    ("LA Galaxy", "LA"),
    ("LAFC", "LAFC"),
    ("CF Montreal", "MTL"),
    ("Montreal", "MTL"),
    ("Montreal Impact", "MTL"),
    ("New York Red Bulls", "NYRB"),
    ("NY", "NYRB"),
    ("Toronto FC", "TOR"),
    ("Atlanta United", "ATL"),
    ("Houston Dynamo", "HOU"),
    ("New York City FC", "NYCFC"),
    ("Philadelphia Union", "PHI"),
    ("Portland Timbers", "POR"),
    ("Real Salt Lake", "RSL"),
    ("FC Cincinnati", "CIN"),
    ("Chivas USA", "CHV"),
    ("Nashville SC", "NSC"),
    ("Inter Miami", "MIA"),
    ("Austin FC", "AFC"),
    ("Charlotte FC", "CLT"),
    ("St. Louis SC", "STL"),
    ("St. Louis City SC", "STL"),
    ("San Diego FC", "SDFC"),
];

/// Club lookup table. Keys are upper-cased so matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct Clubs {
    aliases: BTreeMap<String, String>,
    names: BTreeMap<String, Vec<String>>,
}

impl Default for Clubs {
    fn default() -> Self {
        Self::with_extra(&BTreeMap::new())
    }
}

impl Clubs {
    /// Built-in table plus user-supplied `alias -> abbreviation` pairs.
    pub fn with_extra(extra: &BTreeMap<String, String>) -> Self {
        let mut clubs = Self {
            aliases: BTreeMap::new(),
            names: BTreeMap::new(),
        };
        for (alias, abv) in CLUB_ALIASES {
            clubs.insert(alias, abv);
        }
        for (alias, abv) in extra {
            clubs.insert(alias.trim(), abv.trim());
        }
        clubs
    }

    fn insert(&mut self, alias: &str, abv: &str) {
        let abv = abv.to_uppercase();
        self.aliases.insert(alias.to_uppercase(), abv.clone());
        self.aliases.insert(abv.clone(), abv.clone());
        let names = self.names.entry(abv).or_default();
        if !names.iter().any(|n| n == alias) {
            names.push(alias.to_string());
        }
    }

    /// Canonical abbreviation for a full name or abbreviation.
    pub fn abbreviation(&self, token: &str) -> Option<&str> {
        self.aliases.get(&token.to_uppercase()).map(String::as_str)
    }

    /// Resolve user input to a canonical abbreviation or fail with the list
    /// of valid abbreviations.
    pub fn resolve(&self, input: &str) -> Result<String> {
        let input = input.trim();
        self.abbreviation(input)
            .map(str::to_string)
            .ok_or_else(|| MlsError::UnknownClub {
                name: input.to_string(),
                valid: self.abbreviations().join(", "),
            })
    }

    /// Lenient resolution used by the web form: accepts "Full Name (ABV)" and
    /// matches substrings of names or abbreviations. May return several clubs.
    pub fn search(&self, input: &str) -> Vec<String> {
        let mut needle = input.trim();
        if let Some(idx) = needle.find('(') {
            needle = needle[..idx].trim();
        }
        if needle.is_empty() {
            return Vec::new();
        }
        if let Some(abv) = self.abbreviation(needle) {
            return vec![abv.to_string()];
        }
        let needle = needle.to_uppercase();
        let mut found: Vec<String> = self
            .aliases
            .iter()
            .filter(|(alias, _)| alias.contains(&needle))
            .map(|(_, abv)| abv.clone())
            .collect();
        found.sort();
        found.dedup();
        found
    }

    /// Sorted, de-duplicated canonical abbreviations.
    pub fn abbreviations(&self) -> Vec<&str> {
        self.names.keys().map(String::as_str).collect()
    }

    /// Every recognized spelling for an abbreviation, in table order.
    pub fn names_for(&self, abv: &str) -> &[String] {
        self.names.get(abv).map(Vec::as_slice).unwrap_or(&[])
    }

    /// "Full Name (ABV)" labels, sorted, for pickers.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .names
            .iter()
            .flat_map(|(abv, names)| names.iter().map(move |n| format!("{n} ({abv})")))
            .collect();
        labels.sort();
        labels
    }
}
