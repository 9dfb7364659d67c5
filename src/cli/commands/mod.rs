pub mod export;
pub mod summary;

pub use export::{ExportCommands, ExportFileCommands, handle_export_command, handle_export_file_command};
pub use summary::{SummaryCommands, handle_summary_command};
