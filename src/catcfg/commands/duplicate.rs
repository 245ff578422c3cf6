use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CategoryRecord;

/// Replace the draft with a derived copy. Nothing is persisted until an
/// explicit save.
pub fn run(draft: &CategoryRecord) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_draft(draft.copy());
    result.add_message(CmdMessage::info("Details copied to a new record"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_id_and_name() {
        let mut draft = CategoryRecord::new_draft();
        draft.id = "CAT-7".to_string();
        draft.name = "Invoices".to_string();
        draft.notes = "keep".to_string();

        let result = run(&draft).unwrap();
        let copied = result.draft.unwrap();
        assert_eq!(copied.id, "CAT-7-COPY");
        assert_eq!(copied.name, "Invoices (Copy)");
        assert_eq!(copied.notes, "keep");
    }
}
