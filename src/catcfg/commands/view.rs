use crate::commands::CmdResult;
use crate::error::Result;
use crate::export;
use crate::model::CategoryRecord;

/// The print report for the draft: export rows regrouped into sections.
pub fn run(draft: &CategoryRecord) -> Result<CmdResult> {
    let sections = export::to_sections(draft)?;
    Ok(CmdResult::default().with_sections(sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Row;

    #[test]
    fn report_stays_in_sync_with_export_rows() {
        let mut draft = CategoryRecord::new_draft();
        draft.name = "Invoices".to_string();
        draft.sensitive = true;

        let result = run(&draft).unwrap();
        let mut report_rows: Vec<Row> = result
            .sections
            .into_iter()
            .flat_map(|s| s.rows)
            .collect();
        let mut export_rows = export::to_rows(&draft).unwrap();

        let key = |r: &Row| (r.label.clone(), r.value.clone());
        report_rows.sort_by_key(key);
        export_rows.sort_by_key(key);
        assert_eq!(report_rows, export_rows);
    }

    #[test]
    fn sections_carry_the_print_headings() {
        let draft = CategoryRecord::new_draft();
        let result = run(&draft).unwrap();
        let titles: Vec<_> = result.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "1. PRIMARY IDENTIFICATION",
                "2. EXECUTION SETTINGS",
                "3. ESSENTIALS & CYCLE",
                "4. LOGIC & ENVIRONMENT",
                "CONFIGURATOR NOTES",
            ]
        );
    }
}
