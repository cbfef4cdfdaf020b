mod selection_statistics;
pub mod statistics_ops;
mod statistics_error;

pub use selection_statistics::SelectionStatistics;
pub use statistics_error::StatisticsError;
