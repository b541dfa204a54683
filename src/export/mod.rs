pub mod error;
pub mod format;
pub mod word_entry;

pub use error::ExportError;
pub use format::{export_entries, ExportFormat};

pub trait Export {
    fn to_csv(&self) -> Result<String, ExportError>;
    fn to_md(&self) -> Result<String, ExportError>;
    fn to_json(&self) -> Result<String, ExportError>;
}
