//! # Storage Layer
//!
//! The record store owns the durable slot: one JSON file holding the full
//! ordered list of saved records. The [`DataStore`] trait abstracts it so the
//! command layer can run against [`memory::InMemoryStore`] in tests.
//!
//! ## Semantics
//!
//! - `load_all` tolerates an absent slot (empty list) and an unreadable
//!   payload (empty list, logged at warn level). Parse trouble never reaches
//!   the caller.
//! - `upsert` drops any record sharing the incoming id and appends the new
//!   record at the end, then rewrites the whole slot. An updated record
//!   therefore moves to the end of the list rather than keeping its position.
//! - `delete` filters by id and rewrites; deleting an absent id is a no-op.
//!
//! Every mutation is a full-slot rewrite. There is exactly one writer (the
//! active session), so last-writer-wins is the only consistency rule.

use crate::error::Result;
use crate::model::CategoryRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// All records in the slot, in stored order.
    fn load_all(&self) -> Result<Vec<CategoryRecord>>;

    /// Replace any record sharing `record.id`, append `record` at the end.
    fn upsert(&mut self, record: &CategoryRecord) -> Result<()>;

    /// Remove the record with `id`, if present.
    fn delete(&mut self, id: &str) -> Result<()>;
}
