pub mod report;
pub mod session;
pub mod store;
pub mod validation;

pub use crate::domain::model::{Chart, ChartKind, Mark, SeriesPoint, StudentKey};
pub use crate::domain::ports::{ChartSink, ConfigProvider, MarkRepository};
pub use crate::utils::error::Result;
