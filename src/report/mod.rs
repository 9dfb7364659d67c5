//! Report projection and rendering

pub mod csv_writer;
pub mod projector;
pub mod summary;

pub use csv_writer::{render_report, write_report, write_report_file};
pub use projector::{HEADER, ReportProjector, ReportRow};
pub use summary::task_summary;
