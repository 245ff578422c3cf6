//! # Export Layer
//!
//! A record is first flattened into an ordered sequence of label/value
//! [`Row`]s ([`to_rows`]), then rendered by one of three writers:
//!
//! - [`spreadsheet`]: XLSX workbook, one "Configuration" sheet
//! - [`delimited`]: CSV with a `Field Label, Value` header row
//! - [`document`]: single-page PDF report
//!
//! The print report ([`to_sections`]) is the same row sequence regrouped
//! under section headings — it can never drift from the export rows because
//! both are derived from the same pass over the field registry.
//!
//! Rendering rules: booleans become `Yes`/`No`, empty text becomes `N/A`,
//! everything else passes through as-is. Labels come from the field registry;
//! an unmapped field renders under its raw name.

use crate::error::{CatcfgError, Result};
use crate::fields;
use crate::model::{CategoryRecord, FieldValue};
use std::collections::HashMap;
use std::str::FromStr;

pub mod delimited;
pub mod document;
pub mod spreadsheet;

/// Base name of every emitted report: `Category_Report_<id>.<ext>`.
pub const REPORT_BASENAME: &str = "Category_Report";

/// One record field, rendered for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Spreadsheet,
    Delimited,
    Document,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Delimited => "csv",
            ExportFormat::Document => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CatcfgError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "xlsx" => Ok(ExportFormat::Spreadsheet),
            "csv" => Ok(ExportFormat::Delimited),
            "pdf" => Ok(ExportFormat::Document),
            other => Err(CatcfgError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// File name for a record's report in the given format.
pub fn file_name(record_id: &str, format: ExportFormat) -> String {
    format!("{}_{}.{}", REPORT_BASENAME, record_id, format.extension())
}

/// Flatten a record into label/value rows, one per field, in registry order.
///
/// Fails with `MalformedRecord` if the record cannot produce a value for
/// every registered field; renderers never see a partial row sequence.
pub fn to_rows(record: &CategoryRecord) -> Result<Vec<Row>> {
    fields::REGISTRY
        .iter()
        .map(|spec| {
            let value = record.get(spec.name).ok_or_else(|| {
                CatcfgError::MalformedRecord(format!("no value for field '{}'", spec.name))
            })?;
            Ok(Row {
                label: spec.label().to_string(),
                value: render_value(value),
            })
        })
        .collect()
}

fn render_value(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Flag(true) => "Yes".to_string(),
        FieldValue::Flag(false) => "No".to_string(),
        FieldValue::Text(s) if s.is_empty() => "N/A".to_string(),
        FieldValue::Text(s) => s.to_string(),
    }
}

/// A group of rows under a print-report heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

// Print layout. Together the sections cover every registered field once.
const SECTIONS: &[(&str, &[&str])] = &[
    (
        "1. PRIMARY IDENTIFICATION",
        &["id", "type", "name", "description"],
    ),
    (
        "2. EXECUTION SETTINGS",
        &[
            "objectNaming",
            "propertyStore",
            "sensitive",
            "disableObjectCreation",
            "disableManualCreation",
            "allowConcurrentEditing",
        ],
    ),
    (
        "3. ESSENTIALS & CYCLE",
        &[
            "inputPackage",
            "retentionPolicy",
            "icon",
            "createFolders",
            "exclusiveFolder",
            "listInfo",
            "handler",
        ],
    ),
    (
        "4. LOGIC & ENVIRONMENT",
        &[
            "insertProc",
            "deleteProc",
            "searchScreen",
            "resultScreen",
            "treeAction",
        ],
    ),
    ("CONFIGURATOR NOTES", &["notes"]),
];

/// The print report: [`to_rows`] output regrouped into titled sections.
pub fn to_sections(record: &CategoryRecord) -> Result<Vec<ReportSection>> {
    let rows = to_rows(record)?;
    let by_name: HashMap<&str, &Row> = fields::REGISTRY
        .iter()
        .map(|spec| spec.name)
        .zip(rows.iter())
        .collect();

    SECTIONS
        .iter()
        .map(|&(title, names)| {
            let rows = names
                .iter()
                .map(|name| {
                    by_name.get(name).map(|row| (*row).clone()).ok_or_else(|| {
                        CatcfgError::MalformedRecord(format!("no row for field '{}'", name))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ReportSection { title, rows })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryRecord {
        CategoryRecord {
            id: "CAT-1".to_string(),
            name: "Invoices".to_string(),
            sensitive: true,
            ..CategoryRecord::default()
        }
    }

    #[test]
    fn rows_follow_registry_order() {
        let rows = to_rows(&sample()).unwrap();
        assert_eq!(rows.len(), 23);
        assert_eq!(rows[0].label, "Category ID");
        assert_eq!(rows[0].value, "CAT-1");
        assert_eq!(rows[1].label, "Resource Type");
        assert_eq!(rows[1].value, "Document");
        assert_eq!(rows[2].label, "Category Name");
        assert_eq!(rows[2].value, "Invoices");
    }

    #[test]
    fn booleans_render_as_yes_no() {
        let rows = to_rows(&sample()).unwrap();
        let sensitive = rows.iter().find(|r| r.label == "Sensitive Data").unwrap();
        assert_eq!(sensitive.value, "Yes");
        let creation = rows.iter().find(|r| r.label == "Creation Disabled").unwrap();
        assert_eq!(creation.value, "No");
    }

    #[test]
    fn empty_text_renders_as_na() {
        let rows = to_rows(&sample()).unwrap();
        let description = rows.iter().find(|r| r.label == "Description").unwrap();
        assert_eq!(description.value, "N/A");
    }

    #[test]
    fn unmapped_field_uses_its_raw_name() {
        let mut record = sample();
        record.handler = "default".to_string();
        let rows = to_rows(&record).unwrap();
        let handler = rows.iter().find(|r| r.label == "handler").unwrap();
        assert_eq!(handler.value, "default");
    }

    #[test]
    fn to_rows_is_pure() {
        let record = sample();
        assert_eq!(to_rows(&record).unwrap(), to_rows(&record).unwrap());
    }

    #[test]
    fn sections_cover_the_rows_exactly() {
        let record = sample();
        let rows = to_rows(&record).unwrap();
        let sections = to_sections(&record).unwrap();

        let mut section_rows: Vec<Row> = sections.into_iter().flat_map(|s| s.rows).collect();
        let mut expected = rows;
        let key = |r: &Row| (r.label.clone(), r.value.clone());
        section_rows.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(section_rows, expected);
    }

    #[test]
    fn file_names_carry_the_record_id() {
        assert_eq!(
            file_name("CAT-1", ExportFormat::Spreadsheet),
            "Category_Report_CAT-1.xlsx"
        );
        assert_eq!(
            file_name("CAT-1", ExportFormat::Delimited),
            "Category_Report_CAT-1.csv"
        );
        assert_eq!(
            file_name("CAT-1", ExportFormat::Document),
            "Category_Report_CAT-1.pdf"
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(CatcfgError::UnsupportedFormat(_))
        ));
    }
}
