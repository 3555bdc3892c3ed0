use crate::core::columns::ColumnMap;
use crate::utils::error::{MedalError, Result};
use crate::utils::validation::{validate_distinct_columns, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every key may be left out.
///
/// ```toml
/// strict = false
///
/// [columns]
/// medal = 0
/// gender = 4
/// country = 10
/// country_fallback = 11
/// country_code_max_len = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub strict: bool,
    pub columns: ColumnMap,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| MedalError::file_read(&path.display().to_string(), &e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_distinct_columns(&self.columns.roles())?;
        validate_positive_number(
            "columns.country_code_max_len",
            self.columns.country_code_max_len,
            1,
        )?;
        Ok(())
    }
}
