use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CategoryRecord;

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default().with_draft(CategoryRecord::new_draft());
    result.add_message(CmdMessage::info("New form template loaded"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_fresh_draft() {
        let result = run().unwrap();
        let draft = result.draft.unwrap();
        assert!(draft.id.starts_with("CAT-"));
        assert_eq!(draft.record_type, "Document");
        assert!(draft.name.is_empty());
    }
}
