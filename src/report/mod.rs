//! The spending report: totals per category drawn as a pie chart.

mod aggregation;
mod chart;
mod endpoint;

pub use aggregation::category_totals;
pub use chart::write_report;
pub use endpoint::generate_report_endpoint;
