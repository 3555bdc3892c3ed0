use crate::core::columns::{ColumnMap, MissingColumn};
use crate::core::loader::RawRow;
use crate::domain::model::{Gender, Medal, MedalRecord};
use crate::utils::error::{MedalError, Result};
use thiserror::Error;

/// Why a data row could not become a `MedalRecord`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    #[error("row has no '{name}' column (index {index})")]
    MissingColumn { name: &'static str, index: usize },

    #[error("unrecognized medal '{0}'")]
    UnknownMedal(String),

    #[error("unrecognized gender '{0}'")]
    UnknownGender(String),
}

impl From<MissingColumn> for RowIssue {
    fn from(missing: MissingColumn) -> Self {
        RowIssue::MissingColumn {
            name: missing.name,
            index: missing.index,
        }
    }
}

pub fn map_row(fields: &csv::StringRecord, columns: &ColumnMap) -> std::result::Result<MedalRecord, RowIssue> {
    let medal_text = columns.medal(fields)?;
    let medal = Medal::from_description(medal_text)
        .ok_or_else(|| RowIssue::UnknownMedal(medal_text.to_string()))?;

    let country = columns.country(fields)?;

    let gender_text = columns.gender(fields)?;
    let gender = Gender::from_code(gender_text)
        .ok_or_else(|| RowIssue::UnknownGender(gender_text.to_string()))?;

    Ok(MedalRecord::new(medal, country, gender))
}

/// Maps every row in order. Rows that do not map are skipped with a warning,
/// or abort the run when `strict` is set.
pub fn map_rows(rows: &[RawRow], columns: &ColumnMap, strict: bool) -> Result<Vec<MedalRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        match map_row(&row.fields, columns) {
            Ok(record) => records.push(record),
            Err(issue) if strict => {
                return Err(MedalError::MalformedRow {
                    line: row.line,
                    reason: issue.to_string(),
                });
            }
            Err(issue) => {
                tracing::warn!("Skipping line {}: {}", row.line, issue);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} of {} data rows", skipped, rows.len());
    }

    Ok(records)
}
