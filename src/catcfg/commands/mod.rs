//! # Command Layer
//!
//! The form controller: one module per user action. Commands take the draft
//! (and, where needed, a store) as explicit arguments and return a
//! [`CmdResult`] carrying the replacement draft plus user-facing messages.
//! They never touch ambient state, stdout or the draft slot.

use crate::config::CatcfgConfig;
use crate::export::ReportSection;
use crate::model::CategoryRecord;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod list;
pub mod load;
pub mod new;
pub mod save;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Replacement draft, when the command changed it
    pub draft: Option<CategoryRecord>,
    pub records: Vec<CategoryRecord>,
    pub sections: Vec<ReportSection>,
    pub report_path: Option<PathBuf>,
    pub config: Option<CatcfgConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_draft(mut self, draft: CategoryRecord) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_records(mut self, records: Vec<CategoryRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_sections(mut self, sections: Vec<ReportSection>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_report_path(mut self, path: PathBuf) -> Self {
        self.report_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: CatcfgConfig) -> Self {
        self.config = Some(config);
        self
    }
}
