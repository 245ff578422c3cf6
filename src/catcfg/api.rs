//! # API Facade
//!
//! A thin facade over the command layer — the single entry point for every
//! operation, regardless of the UI in front of it.
//!
//! The facade dispatches to command functions and normalizes inputs (raw
//! `field=value` strings become [`FieldAssignment`]s). It holds no business
//! logic, performs no I/O of its own and returns structured `CmdResult`s,
//! never strings meant for a terminal.
//!
//! `CategoryApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::{CatcfgError, Result};
use crate::model::CategoryRecord;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct CategoryApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> CategoryApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn new_record(&self) -> Result<commands::CmdResult> {
        commands::new::run()
    }

    pub fn save(&mut self, draft: &CategoryRecord) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, draft)
    }

    pub fn delete(&mut self, draft: &CategoryRecord) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, draft)
    }

    pub fn duplicate(&self, draft: &CategoryRecord) -> Result<commands::CmdResult> {
        commands::duplicate::run(draft)
    }

    pub fn edit<A: AsRef<str>>(
        &self,
        draft: &CategoryRecord,
        assignments: &[A],
    ) -> Result<commands::CmdResult> {
        let parsed = parse_assignments(assignments)?;
        commands::edit::run(draft, &parsed)
    }

    pub fn load_record(&self, id: &str) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, id)
    }

    pub fn list_records(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn export(
        &self,
        draft: &CategoryRecord,
        format: &str,
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        commands::export::run(draft, format, out_dir)
    }

    pub fn view(&self, draft: &CategoryRecord) -> Result<commands::CmdResult> {
        commands::view::run(draft)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn parse_assignments<A: AsRef<str>>(inputs: &[A]) -> Result<Vec<FieldAssignment>> {
    inputs
        .iter()
        .map(|input| {
            let raw = input.as_ref();
            match raw.split_once('=') {
                Some((field, value)) if !field.is_empty() => Ok(FieldAssignment::new(
                    field.to_string(),
                    value.to_string(),
                )),
                _ => Err(CatcfgError::Api(format!(
                    "Expected field=value, got '{}'",
                    raw
                ))),
            }
        })
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::FieldAssignment;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
