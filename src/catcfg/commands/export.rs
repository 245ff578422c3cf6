use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{self, document::ReportMeta, ExportFormat};
use crate::model::CategoryRecord;
use chrono::Local;
use std::path::Path;

pub fn run(draft: &CategoryRecord, format: &str, out_dir: &Path) -> Result<CmdResult> {
    let format: ExportFormat = format.parse()?;

    // Derive the full row sequence before touching the filesystem, so a
    // malformed draft never leaves a partial file behind.
    let rows = export::to_rows(draft)?;
    let path = out_dir.join(export::file_name(&draft.id, format));

    match format {
        ExportFormat::Spreadsheet => export::spreadsheet::write_report(&path, &rows)?,
        ExportFormat::Delimited => export::delimited::write_report(&path, &rows)?,
        ExportFormat::Document => {
            let meta = ReportMeta {
                generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            };
            export::document::write_report(&path, &rows, &draft.notes, &meta)?;
        }
    }

    let mut result = CmdResult::default().with_report_path(path);
    result.add_message(CmdMessage::success(match format {
        ExportFormat::Spreadsheet => "Exported as XLSX",
        ExportFormat::Delimited => "Exported as CSV",
        ExportFormat::Document => "Exported as PDF Document",
    }));
    Ok(result)
}
