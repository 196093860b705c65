use crate::utils::error::{InlineError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(InlineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(InlineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InlineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 自訂元素/標籤名稱：小寫字母開頭，僅含小寫字母、數字與 `-`
pub fn validate_tag_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let mut chars = value.chars();
    let starts_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !starts_ok || !rest_ok {
        return Err(InlineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Tag names must start with a lowercase letter and contain only [a-z0-9-]"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct(field_name: &str, first: &str, second: &str) -> Result<()> {
    if first == second {
        return Err(InlineError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("start and end markers must differ (both are '{first}')"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("root", Path::new("./project")).is_ok());
        assert!(validate_path("root", Path::new("")).is_err());
        assert!(validate_path("root", Path::new("bad\0path")).is_err());
    }

    #[test]
    fn test_validate_tag_name() {
        assert!(validate_tag_name("primary_element", "stat-block").is_ok());
        assert!(validate_tag_name("primary_element", "h1").is_ok());
        assert!(validate_tag_name("primary_element", "").is_err());
        assert!(validate_tag_name("primary_element", "Stat-Block").is_err());
        assert!(validate_tag_name("primary_element", "1block").is_err());
        assert!(validate_tag_name("primary_element", "stat block").is_err());
    }

    #[test]
    fn test_validate_distinct() {
        assert!(validate_distinct("markers", "// START", "// END").is_ok());
        assert!(validate_distinct("markers", "// X", "// X").is_err());
    }
}
