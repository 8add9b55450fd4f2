pub mod classifier;
pub mod report_service;
pub mod selector;

pub use report_service::{summarize, ReportService, ScanSettings};
