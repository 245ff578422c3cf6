use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// All stored records, optionally filtered by a case-insensitive substring
/// over id and name.
pub fn run<S: DataStore>(store: &S, filter: Option<&str>) -> Result<CmdResult> {
    let records = store.load_all()?;

    let listed = match filter {
        Some(term) => {
            let needle = term.to_lowercase();
            records
                .into_iter()
                .filter(|r| {
                    r.id.to_lowercase().contains(&needle)
                        || r.name.to_lowercase().contains(&needle)
                })
                .collect()
        }
        None => records,
    };

    Ok(CmdResult::default().with_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::model::CategoryRecord;
    use crate::store::memory::InMemoryStore;

    fn store_with(entries: &[(&str, &str)]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (id, name) in entries {
            let record = CategoryRecord {
                id: id.to_string(),
                name: name.to_string(),
                ..CategoryRecord::default()
            };
            save::run(&mut store, &record).unwrap();
        }
        store
    }

    #[test]
    fn lists_everything_without_a_filter() {
        let store = store_with(&[("CAT-1", "Invoices"), ("CAT-2", "Contracts")]);
        let result = run(&store, None).unwrap();
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn filter_matches_id_and_name_case_insensitively() {
        let store = store_with(&[("CAT-1", "Invoices"), ("CAT-2", "Contracts")]);

        let by_name = run(&store, Some("invoice")).unwrap();
        assert_eq!(by_name.records.len(), 1);
        assert_eq!(by_name.records[0].id, "CAT-1");

        let by_id = run(&store, Some("cat-2")).unwrap();
        assert_eq!(by_id.records.len(), 1);
        assert_eq!(by_id.records[0].name, "Contracts");

        let none = run(&store, Some("archive")).unwrap();
        assert!(none.records.is_empty());
    }
}
