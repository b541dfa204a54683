use std::io::Write;

use crate::export::{Export, ExportError};
use crate::model::WordEntry;

impl Export for [WordEntry] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for entry in self {
            wtr.serialize(entry)?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();

        writeln!(buffer, "| ID | English | Spanish | Local | Remote | Image |")?;
        writeln!(buffer, "|----|---------|---------|-------|--------|-------|")?;

        for entry in self {
            let image = entry.image().map(|img| img.name()).unwrap_or("N/A");
            writeln!(
                buffer,
                "| {} | {} | {} | {} | {} | {} |",
                entry.id(),
                escape_cell(entry.english()),
                escape_cell(entry.spanish()),
                escape_cell(entry.local()),
                escape_cell(entry.remote()),
                escape_cell(image)
            )?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::Json)
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
