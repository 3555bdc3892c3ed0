//! Named access to the positional columns of a medals export.
//!
//! The export has no stable schema we can rely on: names containing commas
//! shift every later column by one. `ColumnMap` keeps the positions in one
//! place, and the country lookup falls back to the next column when the
//! primary one does not hold a short country code.

use csv::StringRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub medal: usize,
    pub gender: usize,
    pub country: usize,
    pub country_fallback: usize,
    pub country_code_max_len: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            medal: 0,
            gender: 4,
            country: 10,
            country_fallback: 11,
            country_code_max_len: 3,
        }
    }
}

/// A column the mapper needed but the row did not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingColumn {
    pub name: &'static str,
    pub index: usize,
}

impl ColumnMap {
    pub fn medal<'r>(&self, row: &'r StringRecord) -> Result<&'r str, MissingColumn> {
        field(row, "medal", self.medal)
    }

    pub fn gender<'r>(&self, row: &'r StringRecord) -> Result<&'r str, MissingColumn> {
        field(row, "gender", self.gender)
    }

    /// Primary country column, unless its value is longer than a country code.
    pub fn country<'r>(&self, row: &'r StringRecord) -> Result<&'r str, MissingColumn> {
        let primary = field(row, "country", self.country)?;
        if primary.chars().count() > self.country_code_max_len {
            field(row, "country_fallback", self.country_fallback)
        } else {
            Ok(primary)
        }
    }

    /// Role name and index of every mapped column, for validation and logging.
    pub fn roles(&self) -> [(&'static str, usize); 4] {
        [
            ("medal", self.medal),
            ("gender", self.gender),
            ("country", self.country),
            ("country_fallback", self.country_fallback),
        ]
    }
}

fn field<'r>(
    row: &'r StringRecord,
    name: &'static str,
    index: usize,
) -> Result<&'r str, MissingColumn> {
    row.get(index).ok_or(MissingColumn { name, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, fallback: &str) -> StringRecord {
        StringRecord::from(vec![
            "Gold Medal", "1", "2024-07-27", "Some Athlete", "W", "Swimming", "Event", "ATH",
            "/en/", "123", country, fallback,
        ])
    }

    #[test]
    fn test_country_uses_primary_column_for_short_codes() {
        let columns = ColumnMap::default();
        assert_eq!(columns.country(&row("AUS", "Australia")), Ok("AUS"));
    }

    #[test]
    fn test_country_falls_back_when_primary_is_too_long() {
        let columns = ColumnMap::default();
        assert_eq!(columns.country(&row("Jr.", "USA")), Ok("Jr."));
        assert_eq!(columns.country(&row("Junior", "USA")), Ok("USA"));
    }

    #[test]
    fn test_missing_columns_are_reported_by_role() {
        let columns = ColumnMap::default();
        let short = StringRecord::from(vec!["Gold Medal", "1"]);

        assert_eq!(columns.medal(&short), Ok("Gold Medal"));
        assert_eq!(
            columns.gender(&short),
            Err(MissingColumn {
                name: "gender",
                index: 4
            })
        );

        let no_fallback = StringRecord::from(vec![
            "Gold Medal", "", "", "", "M", "", "", "", "", "", "Netherlands",
        ]);
        assert_eq!(
            columns.country(&no_fallback),
            Err(MissingColumn {
                name: "country_fallback",
                index: 11
            })
        );
    }
}
