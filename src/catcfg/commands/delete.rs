use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CategoryRecord;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: &CategoryRecord) -> Result<CmdResult> {
    store.delete(&draft.id)?;

    let mut result = CmdResult::default().with_draft(CategoryRecord::new_draft());
    result.add_message(CmdMessage::info("Record deleted"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::store::memory::InMemoryStore;

    fn draft(id: &str, name: &str) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: name.to_string(),
            ..CategoryRecord::default()
        }
    }

    #[test]
    fn removes_the_drafts_record() {
        let mut store = InMemoryStore::new();
        let record = draft("CAT-1", "Invoices");
        save::run(&mut store, &record).unwrap();

        run(&mut store, &record).unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn absent_id_leaves_the_store_unchanged() {
        let mut store = InMemoryStore::new();
        save::run(&mut store, &draft("CAT-1", "Invoices")).unwrap();
        let before = store.load_all().unwrap();

        run(&mut store, &draft("CAT-404", "Ghost")).unwrap();
        assert_eq!(store.load_all().unwrap(), before);
    }

    #[test]
    fn replaces_the_draft_with_a_fresh_one() {
        let mut store = InMemoryStore::new();
        let record = draft("CAT-1", "Invoices");

        let result = run(&mut store, &record).unwrap();
        let fresh = result.draft.unwrap();
        assert_ne!(fresh.id, "CAT-1");
        assert!(fresh.name.is_empty());
    }
}
