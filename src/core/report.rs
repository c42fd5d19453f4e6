use crate::core::store::MarkStore;
use crate::domain::model::{Chart, ChartKind, SeriesPoint};
use crate::utils::error::{ProgressError, Result};

pub const NO_MARKS_MESSAGE: &str = "No data to plot. Please add marks first.";
pub const NO_YEARLY_DATA_MESSAGE: &str = "Not enough data to create a yearly summary.";

fn mean(scores: &[i32]) -> f64 {
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

/// Average score per year, years 1 to 3, skipping years with no marks.
pub fn yearly_averages(store: &MarkStore) -> Vec<SeriesPoint> {
    store
        .group_by_year()
        .iter()
        .filter(|(_, scores)| !scores.is_empty())
        .map(|(year, scores)| SeriesPoint::new(format!("Year {}", year), mean(scores)))
        .collect()
}

/// Average score per subject, in the order subjects were first recorded.
pub fn subject_averages(store: &MarkStore) -> Vec<SeriesPoint> {
    store
        .group_by_subject()
        .iter()
        .map(|(subject, scores)| SeriesPoint::new(subject, mean(scores)))
        .collect()
}

pub fn yearly_chart(store: &MarkStore) -> Result<Chart> {
    if store.is_empty() {
        return Err(no_data(NO_MARKS_MESSAGE));
    }
    let points = yearly_averages(store);
    if points.is_empty() {
        return Err(no_data(NO_YEARLY_DATA_MESSAGE));
    }
    Ok(Chart {
        kind: ChartKind::Bar,
        title: format!("Average Performance Per Year for {}", store.student_name()),
        value_label: "Average Score (%)".to_string(),
        points,
    })
}

pub fn subject_chart(store: &MarkStore) -> Result<Chart> {
    let points = subject_averages(store);
    if points.is_empty() {
        return Err(no_data(NO_MARKS_MESSAGE));
    }
    Ok(Chart {
        kind: ChartKind::Pie,
        title: format!("Average Score by Subject for {}", store.student_name()),
        value_label: "Share of total".to_string(),
        points,
    })
}

fn no_data(message: &str) -> ProgressError {
    ProgressError::NoData {
        message: message.to_string(),
    }
}
