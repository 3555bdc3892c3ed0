use crate::utils::error::{MedalError, Result};
use std::collections::HashMap;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(MedalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Each column index may serve one role only.
pub fn validate_distinct_columns(roles: &[(&str, usize)]) -> Result<()> {
    let mut taken: HashMap<usize, &str> = HashMap::new();

    for &(role, index) in roles {
        if let Some(other) = taken.insert(index, role) {
            return Err(MedalError::InvalidConfigValueError {
                field: format!("columns.{}", role),
                value: index.to_string(),
                reason: format!("Column {} is already mapped to '{}'", index, other),
            });
        }
    }

    Ok(())
}
