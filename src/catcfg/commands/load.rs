use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatcfgError, Result};
use crate::store::DataStore;

/// Replace the draft with a stored record.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let record = store
        .load_all()?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CatcfgError::Api(format!("No stored record with id '{}'", id)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Loaded record {}", record.id)));
    result.draft = Some(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::model::CategoryRecord;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn loads_a_stored_record_into_the_draft() {
        let mut store = InMemoryStore::new();
        let record = CategoryRecord {
            id: "CAT-1".to_string(),
            name: "Invoices".to_string(),
            ..CategoryRecord::default()
        };
        save::run(&mut store, &record).unwrap();

        let result = run(&store, "CAT-1").unwrap();
        assert_eq!(result.draft.unwrap(), record);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let store = InMemoryStore::new();
        let err = run(&store, "CAT-404").unwrap_err();
        assert!(matches!(err, CatcfgError::Api(_)));
    }
}
