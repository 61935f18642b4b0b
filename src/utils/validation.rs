use crate::utils::error::{MatchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_input_path(path: &str) -> Result<()> {
    if path.trim().is_empty() || !Path::new(path).is_file() {
        return Err(MatchError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(())
}
