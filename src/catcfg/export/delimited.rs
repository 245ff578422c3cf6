use super::Row;
use crate::error::Result;
use std::path::Path;

/// Write the rows as CSV: a `Field Label, Value` header, then one data row
/// per record field in row order.
pub fn write_report(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Field Label", "Value"])?;
    for row in rows {
        writer.write_record([row.label.as_str(), row.value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.csv");
        let rows = vec![
            Row {
                label: "Category ID".to_string(),
                value: "CAT-1".to_string(),
            },
            Row {
                label: "Sensitive Data".to_string(),
                value: "Yes".to_string(),
            },
        ];

        write_report(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "Field Label,Value");
        assert_eq!(lines[1], "Category ID,CAT-1");
        assert_eq!(lines[2], "Sensitive Data,Yes");
    }

    #[test]
    fn quotes_values_containing_commas() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.csv");
        let rows = vec![Row {
            label: "Internal Notes".to_string(),
            value: "audited, approved".to_string(),
        }];

        write_report(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"audited, approved\""));
    }
}
