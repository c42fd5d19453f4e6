use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("{field} is not a whole number: '{value}'")]
    Parse { field: String, value: String },

    #[error("{field} out of range ({value}): {reason}")]
    Range {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} cannot be empty")]
    MissingValue { field: String },

    #[error("Corrupt marks file {path}: {reason}")]
    FileCorrupt { path: String, reason: String },

    #[error("No data: {message}")]
    NoData { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },
}

impl ProgressError {
    /// Text shown to the person at the console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ProgressError::Parse { .. } => {
                "Invalid input. Please enter a valid number for score and year.".to_string()
            }
            ProgressError::Range { field, .. } if field == "year" => {
                "Invalid year. Please enter 1, 2, 3".to_string()
            }
            ProgressError::Range { field, .. } if field == "score" => {
                "Invalid score. Please enter a value between 0 and 100.".to_string()
            }
            ProgressError::Range { field, reason, .. } => format!("Invalid {}. {}", field, reason),
            ProgressError::MissingValue { field } => format!("The {} cannot be empty.", field),
            ProgressError::NoData { message } => message.clone(),
            ProgressError::FileCorrupt { .. } => {
                "The saved marks could not be read and were reset.".to_string()
            }
            ProgressError::Io(e) => format!("Could not access the marks file: {}", e),
            ProgressError::Csv(e) => format!("Could not write the marks file: {}", e),
            ProgressError::Config { field, message } => {
                format!("Invalid configuration for '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProgressError::Parse { .. }
            | ProgressError::Range { .. }
            | ProgressError::MissingValue { .. } => "Re-enter the value from the menu",
            ProgressError::NoData { .. } => "Add some marks first",
            ProgressError::FileCorrupt { .. } => "Restore the marks file from a backup",
            ProgressError::Io(_) | ProgressError::Csv(_) => {
                "Check that the data directory exists and is writable"
            }
            ProgressError::Config { .. } => "Fix the config file or the command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_messages_depend_on_field() {
        let year = ProgressError::Range {
            field: "year".to_string(),
            value: "4".to_string(),
            reason: "must be 1, 2 or 3".to_string(),
        };
        assert_eq!(year.user_friendly_message(), "Invalid year. Please enter 1, 2, 3");

        let score = ProgressError::Range {
            field: "score".to_string(),
            value: "101".to_string(),
            reason: "must be between 0 and 100".to_string(),
        };
        assert!(score.user_friendly_message().contains("between 0 and 100"));
        assert_eq!(score.recovery_suggestion(), "Re-enter the value from the menu");
    }

    #[test]
    fn test_io_errors_point_at_data_dir() {
        let err = ProgressError::from(std::io::Error::other("disk full"));
        assert!(err.recovery_suggestion().contains("data directory"));
        assert!(err.user_friendly_message().contains("disk full"));
    }
}
