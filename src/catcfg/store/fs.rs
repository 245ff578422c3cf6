use super::DataStore;
use crate::error::{CatcfgError, Result};
use crate::model::CategoryRecord;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

pub const RECORDS_FILENAME: &str = "records.json";

/// File-backed record store. The slot is a pretty-printed JSON array at
/// `<data_dir>/records.json`.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(RECORDS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(CatcfgError::Io)?;
        }
        Ok(())
    }

    fn write_all(&self, records: &[CategoryRecord]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(CatcfgError::Serialization)?;
        fs::write(self.records_path(), content).map_err(CatcfgError::Io)?;
        Ok(())
    }

    fn read_slot(&self, path: &Path) -> Result<Vec<CategoryRecord>> {
        let content = fs::read_to_string(path).map_err(CatcfgError::Io)?;
        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                // Corrupt slot: recover as empty rather than failing the session
                warn!("Ignoring unreadable record slot {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }
}

impl DataStore for FileStore {
    fn load_all(&self) -> Result<Vec<CategoryRecord>> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        self.read_slot(&path)
    }

    fn upsert(&mut self, record: &CategoryRecord) -> Result<()> {
        let mut records = self.load_all()?;
        records.retain(|r| r.id != record.id);
        records.push(record.clone());
        self.write_all(&records)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let mut records = self.load_all()?;
        records.retain(|r| r.id != id);
        self.write_all(&records)
    }
}
