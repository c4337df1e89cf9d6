//! Result set exporters.

use std::io::Write;

use crate::kernel::matcher::SearchHit;
use crate::kernel::services::ports::export::{
    ExportError, ExportFormat, ExportRow, ResultExporter,
};

const TSV_HEADER: &str = "chapter_id\tchapter_name\tverse_number\ttext";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pub pretty: bool,
}

impl ResultExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, hits: &[SearchHit<'_>], out: &mut dyn Write) -> Result<(), ExportError> {
        let rows: Vec<ExportRow<'_>> = hits.iter().map(ExportRow::from).collect();
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
        } else {
            serde_json::to_writer(&mut *out, &rows)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

/// Tabs and line breaks inside a field would break the row layout.
fn tsv_field(value: &str) -> String {
    value
        .chars()
        .map(|ch| if matches!(ch, '\t' | '\n' | '\r') { ' ' } else { ch })
        .collect()
}

impl ResultExporter for TsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Tsv
    }

    fn export(&self, hits: &[SearchHit<'_>], out: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(out, "{}", TSV_HEADER)?;
        for row in hits.iter().map(ExportRow::from) {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                row.chapter_id,
                tsv_field(row.chapter_name),
                row.verse_number,
                tsv_field(row.text)
            )?;
        }
        Ok(())
    }
}

pub fn exporter_for(format: ExportFormat) -> Box<dyn ResultExporter> {
    match format {
        ExportFormat::Json => Box::new(JsonExporter { pretty: true }),
        ExportFormat::Tsv => Box::new(TsvExporter),
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/export.rs"]
mod tests;
