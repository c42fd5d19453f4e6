use crate::domain::model::Mark;
use crate::utils::error::{ProgressError, Result};
use crate::utils::validation::{parse_integer, validate_non_empty_string, validate_range};

pub const VALID_YEARS: [i32; 3] = [1, 2, 3];
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Turns three raw console answers into a [`Mark`].
///
/// Checks run in prompt order (year, subject, score) and stop at the first
/// failure. Nothing is mutated here; the caller appends and saves.
pub fn validate_new_mark(raw_year: &str, raw_subject: &str, raw_score: &str) -> Result<Mark> {
    let year = validate_year(raw_year)?;
    let subject = validate_subject(raw_subject)?;
    let score = validate_score(raw_score)?;
    Ok(Mark::new(subject, score, year))
}

pub fn validate_year(raw_year: &str) -> Result<i32> {
    let year = parse_integer("year", raw_year)?;
    if !VALID_YEARS.contains(&year) {
        return Err(ProgressError::Range {
            field: "year".to_string(),
            value: year.to_string(),
            reason: "Year must be 1, 2 or 3".to_string(),
        });
    }
    Ok(year)
}

pub fn validate_subject(raw_subject: &str) -> Result<String> {
    validate_non_empty_string("subject", raw_subject)?;
    Ok(normalize_subject(raw_subject))
}

pub fn validate_score(raw_score: &str) -> Result<i32> {
    let score = parse_integer("score", raw_score)?;
    validate_range("score", score, MIN_SCORE, MAX_SCORE)?;
    Ok(score)
}

/// Trims, upper-cases the first character and lower-cases the rest
/// ("mATHS and physics" -> "Maths and physics").
pub fn normalize_subject(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Trims and title-cases every word ("ada o'neil-smith" -> "Ada O'Neil-Smith").
pub fn normalize_student_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
