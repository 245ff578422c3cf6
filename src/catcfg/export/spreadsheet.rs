use super::Row;
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Configuration";

/// Write the rows as an XLSX workbook: one "Configuration" sheet, a bold
/// `Field Label / Value` header, one data row per record field.
pub fn write_report(path: &Path, rows: &[Row]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "Field Label", &header)?;
    worksheet.write_string_with_format(0, 1, "Value", &header)?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.label)?;
        worksheet.write_string(r, 1, &row.value)?;
    }

    worksheet.set_column_width(0, 28)?;
    worksheet.set_column_width(1, 44)?;

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_an_xlsx_package() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.xlsx");
        let rows = vec![Row {
            label: "Category ID".to_string(),
            value: "CAT-1".to_string(),
        }];

        write_report(&path, &rows).unwrap();

        // XLSX is a zip package: PK magic
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
