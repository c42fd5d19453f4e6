use crate::core::validation::VALID_YEARS;
use crate::domain::model::{Mark, StudentKey};
use std::collections::HashMap;

/// A student's marks in the order they were added.
#[derive(Debug, Clone)]
pub struct MarkStore {
    student_name: String,
    key: StudentKey,
    marks: Vec<Mark>,
}

impl MarkStore {
    pub fn new(student_name: impl Into<String>) -> Self {
        Self::with_marks(student_name, Vec::new())
    }

    pub fn with_marks(student_name: impl Into<String>, marks: Vec<Mark>) -> Self {
        let student_name = student_name.into();
        let key = StudentKey::from_name(&student_name);
        Self {
            student_name,
            key,
            marks,
        }
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn key(&self) -> &StudentKey {
        &self.key
    }

    pub fn add(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks ordered by year, then subject. The sort is stable, so exact
    /// (year, subject) duplicates keep their insertion order. Recomputed on
    /// every call.
    pub fn all_sorted(&self) -> impl Iterator<Item = &Mark> + '_ {
        let mut sorted: Vec<&Mark> = self.marks.iter().collect();
        sorted.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.subject.cmp(&b.subject)));
        sorted.into_iter()
    }

    /// Scores per canonical year. Marks with any other year are left out.
    pub fn group_by_year(&self) -> YearlyScores {
        let mut grouped = YearlyScores::default();
        for mark in &self.marks {
            if let Some(bucket) = grouped.bucket_mut(mark.year) {
                bucket.push(mark.score);
            }
        }
        grouped
    }

    pub fn group_by_subject(&self) -> SubjectScores {
        let mut grouped = SubjectScores::default();
        for mark in &self.marks {
            grouped.push(&mark.subject, mark.score);
        }
        grouped
    }
}

/// One bucket per year 1, 2 and 3; empty buckets are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyScores {
    buckets: [(i32, Vec<i32>); 3],
}

impl Default for YearlyScores {
    fn default() -> Self {
        Self {
            buckets: VALID_YEARS.map(|year| (year, Vec::new())),
        }
    }
}

impl YearlyScores {
    fn bucket_mut(&mut self, year: i32) -> Option<&mut Vec<i32>> {
        self.buckets
            .iter_mut()
            .find(|(y, _)| *y == year)
            .map(|(_, scores)| scores)
    }

    pub fn scores(&self, year: i32) -> Option<&[i32]> {
        self.buckets
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, scores)| scores.as_slice())
    }

    /// All three buckets in year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[i32])> + '_ {
        self.buckets
            .iter()
            .map(|(year, scores)| (*year, scores.as_slice()))
    }
}

/// Scores per subject, subjects in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectScores {
    order: Vec<(String, Vec<i32>)>,
    index: HashMap<String, usize>,
}

impl SubjectScores {
    fn push(&mut self, subject: &str, score: i32) {
        match self.index.get(subject) {
            Some(&i) => self.order[i].1.push(score),
            None => {
                self.index.insert(subject.to_string(), self.order.len());
                self.order.push((subject.to_string(), vec![score]));
            }
        }
    }

    pub fn scores(&self, subject: &str) -> Option<&[i32]> {
        self.index
            .get(subject)
            .map(|&i| self.order[i].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i32])> + '_ {
        self.order
            .iter()
            .map(|(subject, scores)| (subject.as_str(), scores.as_slice()))
    }
}
