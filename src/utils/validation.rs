use crate::utils::error::{ProgressError, Result};
use std::num::IntErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a whole number the way a person types it: surrounding whitespace
/// and a leading sign are accepted. A whole number too large for `i32` is
/// out of range rather than unparseable.
pub fn parse_integer(field_name: &str, raw: &str) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ProgressError::Range {
            field: field_name.to_string(),
            value: raw.trim().to_string(),
            reason: "Value is too large".to_string(),
        },
        _ => ProgressError::Parse {
            field: field_name.to_string(),
            value: raw.to_string(),
        },
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProgressError::Config {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProgressError::Config {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProgressError::MissingValue {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProgressError::Range {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("score", "87").unwrap(), 87);
        assert_eq!(parse_integer("score", " 42 \n").unwrap(), 42);
        assert_eq!(parse_integer("score", "-3").unwrap(), -3);
        assert!(matches!(
            parse_integer("score", "abc"),
            Err(ProgressError::Parse { .. })
        ));
        assert!(parse_integer("year", "").is_err());
        assert!(parse_integer("year", "1.5").is_err());
        assert!(matches!(
            parse_integer("score", "-99999999999"),
            Err(ProgressError::Range { .. })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("score", 0, 0, 100).is_ok());
        assert!(validate_range("score", 100, 0, 100).is_ok());
        assert!(matches!(
            validate_range("score", 101, 0, 100),
            Err(ProgressError::Range { .. })
        ));
        assert!(validate_range("score", -1, 0, 100).is_err());
    }

    #[test]
    fn test_validate_path_and_strings() {
        assert!(validate_path("data_dir", "./marks").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
        assert!(validate_non_empty_string("subject", "Maths").is_ok());
        assert!(validate_non_empty_string("subject", "   ").is_err());
    }
}
