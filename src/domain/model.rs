use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Matches the medal description column exactly, e.g. `"Gold Medal"`.
    pub fn from_description(text: &str) -> Option<Self> {
        match text {
            "Gold Medal" => Some(Medal::Gold),
            "Silver Medal" => Some(Medal::Silver),
            "Bronze Medal" => Some(Medal::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    W,
    X,
    O,
}

impl Gender {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::M),
            "W" => Some(Gender::W),
            "X" => Some(Gender::X),
            "O" => Some(Gender::O),
            _ => None,
        }
    }

    /// Only `M` and `W` take part in the single-gender check.
    pub fn is_binary(self) -> bool {
        matches!(self, Gender::M | Gender::W)
    }
}

/// One medal won, as read from a single data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalRecord {
    pub medal: Medal,
    pub country: String,
    pub gender: Gender,
}

impl MedalRecord {
    pub fn new(medal: Medal, country: impl Into<String>, gender: Gender) -> Self {
        Self {
            medal,
            country: country.into(),
            gender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTotals {
    pub country: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl CountryTotals {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            gold: 0,
            silver: 0,
            bronze: 0,
            total: 0,
        }
    }

    pub fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
        self.total = self.gold + self.silver + self.bronze;
    }

    /// Composite ranking key, compared descending.
    pub fn rank_key(&self) -> (u32, u32, u32, u32) {
        (self.total, self.gold, self.silver, self.bronze)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedalReport {
    pub ranking: Vec<CountryTotals>,
    pub single_gender: Vec<String>,
}
