use crate::domain::model::{Chart, Mark, StudentKey};
use crate::utils::error::Result;

/// Durable storage for one student's marks.
pub trait MarkRepository {
    /// Returns the saved marks, or an empty list when nothing usable is stored.
    fn load(&self, key: &StudentKey) -> Result<Vec<Mark>>;
    /// Replaces everything stored for `key` with `marks`, in order.
    fn save(&self, key: &StudentKey, marks: &[Mark]) -> Result<()>;
}

/// Renders a chart and returns once it has been shown.
pub trait ChartSink {
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn file_prefix(&self) -> &str;
    fn chart_width(&self) -> usize;
}
