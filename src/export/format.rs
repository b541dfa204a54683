use clap::ValueEnum;

use super::{Export, ExportError};
use crate::model::WordEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    #[value(name = "md", alias = "markdown")]
    Markdown,
    Csv,
    Json,
}

pub fn export_entries(entries: &[WordEntry], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Markdown => entries.to_md(),
        ExportFormat::Csv => entries.to_csv(),
        ExportFormat::Json => entries.to_json(),
    }
}
