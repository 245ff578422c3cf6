use super::DataStore;
use crate::error::Result;
use crate::model::CategoryRecord;

/// In-memory store for testing. Mirrors the file store's ordering semantics,
/// does NOT persist.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<CategoryRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<CategoryRecord>> {
        Ok(self.records.clone())
    }

    fn upsert(&mut self, record: &CategoryRecord) -> Result<()> {
        self.records.retain(|r| r.id != record.id);
        self.records.push(record.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.records.retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: "Test".to_string(),
            ..CategoryRecord::default()
        }
    }

    #[test]
    fn upsert_appends_updates_at_end() {
        let mut store = InMemoryStore::new();
        store.upsert(&record("a")).unwrap();
        store.upsert(&record("b")).unwrap();
        store.upsert(&record("a")).unwrap();

        let ids: Vec<_> = store.load_all().unwrap().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn delete_is_a_no_op_for_absent_ids() {
        let mut store = InMemoryStore::new();
        store.upsert(&record("a")).unwrap();
        store.delete("missing").unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
