use serde::{Deserialize, Serialize};
use std::fmt;

/// One (subject, score, year) observation for a student.
///
/// Construction does not validate; inputs typed at the console go through
/// [`crate::core::validation::validate_new_mark`] first. Values read back
/// from a marks file only need to be whole numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub subject: String,
    pub score: i32,
    pub year: i32,
}

impl Mark {
    pub fn new(subject: impl Into<String>, score: i32, year: i32) -> Self {
        Self {
            subject: subject.into(),
            score,
            year,
        }
    }
}

/// File-name-safe form of a student's display name.
///
/// Only spaces are replaced (with underscores); nothing else is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentKey(String);

impl StudentKey {
    pub fn from_name(name: &str) -> Self {
        Self(name.replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Bars on a fixed 0-100 axis.
    Bar,
    /// Slices labelled with their share of the total.
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub value_label: String,
    pub points: Vec<SeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_key_replaces_only_spaces() {
        assert_eq!(StudentKey::from_name("Ada Lovelace").as_str(), "Ada_Lovelace");
        assert_eq!(StudentKey::from_name("Jean-Luc  Picard").as_str(), "Jean-Luc__Picard");
        assert_eq!(StudentKey::from_name("a/b").to_string(), "a/b");
    }

    #[test]
    fn test_identical_marks_compare_equal() {
        assert_eq!(Mark::new("Maths", 87, 1), Mark::new("Maths".to_string(), 87, 1));
        assert_ne!(Mark::new("Maths", 87, 1), Mark::new("Maths", 87, 2));
    }
}
