// Service exports
pub mod exporter;
pub mod loader;

pub use exporter::{print_report, write_report, ExportError};
pub use loader::{load_contacts, LoaderError};
