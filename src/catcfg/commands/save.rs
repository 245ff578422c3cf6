use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatcfgError, Result};
use crate::model::CategoryRecord;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: &CategoryRecord) -> Result<CmdResult> {
    if draft.name.is_empty() {
        return Err(CatcfgError::Validation("Name is required to save".to_string()));
    }

    store.upsert(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record saved to local storage"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn draft(id: &str, name: &str) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: name.to_string(),
            ..CategoryRecord::default()
        }
    }

    #[test]
    fn saved_record_round_trips() {
        let mut store = InMemoryStore::new();
        let mut record = draft("CAT-1", "Invoices");
        record.sensitive = true;

        run(&mut store, &record).unwrap();

        let stored = store.load_all().unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn empty_name_is_rejected_and_store_is_untouched() {
        let mut store = InMemoryStore::new();
        store.upsert(&draft("CAT-9", "Existing")).unwrap();
        let before = store.load_all().unwrap();

        let err = run(&mut store, &draft("CAT-1", "")).unwrap_err();
        assert!(matches!(err, CatcfgError::Validation(_)));
        assert_eq!(store.load_all().unwrap(), before);
    }

    #[test]
    fn repeated_save_is_idempotent() {
        let mut store = InMemoryStore::new();
        let record = draft("CAT-1", "Invoices");

        run(&mut store, &record).unwrap();
        run(&mut store, &record).unwrap();

        assert_eq!(store.load_all().unwrap(), vec![record]);
    }

    #[test]
    fn resaving_moves_the_record_to_the_end() {
        // Deliberate upsert behavior: an updated record is appended, not
        // kept in place.
        let mut store = InMemoryStore::new();
        run(&mut store, &draft("CAT-1", "First")).unwrap();
        run(&mut store, &draft("CAT-2", "Second")).unwrap();
        run(&mut store, &draft("CAT-1", "First again")).unwrap();

        let ids: Vec<_> = store
            .load_all()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["CAT-2", "CAT-1"]);
    }
}
