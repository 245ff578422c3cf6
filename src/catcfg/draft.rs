//! Draft slot persistence for the binary.
//!
//! The CLI edits one draft record across invocations, so the draft lives in
//! its own slot (`draft.json`) beside the record store. Like the record slot
//! it fails soft: an absent or unreadable draft just means starting fresh.
//! The library's command layer never touches this — it takes the draft as an
//! explicit argument.

use crate::error::{CatcfgError, Result};
use crate::model::CategoryRecord;
use log::warn;
use std::fs;
use std::path::PathBuf;

pub const DRAFT_FILENAME: &str = "draft.json";

pub struct DraftSlot {
    data_dir: PathBuf,
}

impl DraftSlot {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path(&self) -> PathBuf {
        self.data_dir.join(DRAFT_FILENAME)
    }

    /// The stored draft, or None when the slot is absent or unreadable.
    pub fn load(&self) -> Result<Option<CategoryRecord>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(CatcfgError::Io)?;
        match serde_json::from_str(&content) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                warn!("Ignoring unreadable draft slot {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    pub fn save(&self, draft: &CategoryRecord) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(CatcfgError::Io)?;
        }
        let content = serde_json::to_string_pretty(draft).map_err(CatcfgError::Serialization)?;
        fs::write(self.path(), content).map_err(CatcfgError::Io)?;
        Ok(())
    }
}
