//! The form schema: every record field with its edit kind, export label and,
//! for selects, the option set.
//!
//! [`REGISTRY`] order is the canonical field order — export rows, the print
//! report and the `fields` listing all follow it. Select option sets are a
//! UI-level aid only: an out-of-set value is stored verbatim.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Switch,
    ReadOnly,
    Select(&'static [SelectOption]),
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    label: Option<&'static str>,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Export label; falls back to the raw field name when none is mapped.
    pub fn label(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
}

const fn opt(label: &'static str, value: &'static str) -> SelectOption {
    SelectOption { label, value }
}

const NAMING_OPTIONS: &[SelectOption] = &[
    opt("EmptyName", "empty"),
    opt("Auto-Generate", "auto"),
    opt("System Default", "sys"),
];

const STORE_OPTIONS: &[SelectOption] = &[
    opt("Default Store", ""),
    opt("High Speed Cache", "cache"),
    opt("Persistent Disk", "disk"),
];

const RETENTION_OPTIONS: &[SelectOption] = &[
    opt("Standard (36 Months)", "3"),
    opt("Extended (10 Years)", "10"),
    opt("Archive Only", "arc"),
];

const ICON_OPTIONS: &[SelectOption] = &[
    opt("Default Folder", "f"),
    opt("Document Stack", "d"),
    opt("Pie Chart", "c"),
];

const EXCLUSIVE_OPTIONS: &[SelectOption] = &[
    opt("Global Accessibility", "no"),
    opt("Local Restricted", "yes"),
];

const LIST_INFO_OPTIONS: &[SelectOption] = &[opt("Master Document Categories", "master")];

const HANDLER_OPTIONS: &[SelectOption] = &[opt("Default Handler", "default")];

const INSERT_PROC_OPTIONS: &[SelectOption] =
    &[opt("val_proc_validate", "v"), opt("sys_proc_init", "i")];

const DELETE_PROC_OPTIONS: &[SelectOption] = &[opt("sys_proc_cleanup", "c")];

const SEARCH_SCREEN_OPTIONS: &[SelectOption] = &[opt("Wide Filter View", "w")];

const RESULT_SCREEN_OPTIONS: &[SelectOption] = &[opt("Compact Info List", "c")];

const TREE_ACTION_OPTIONS: &[SelectOption] = &[opt("Open in Current", "curr")];

pub static REGISTRY: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        label: Some("Category ID"),
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "type",
        label: Some("Resource Type"),
        kind: FieldKind::ReadOnly,
    },
    FieldSpec {
        name: "name",
        label: Some("Category Name"),
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "description",
        label: Some("Description"),
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "objectNaming",
        label: Some("Naming Convention"),
        kind: FieldKind::Select(NAMING_OPTIONS),
    },
    FieldSpec {
        name: "propertyStore",
        label: Some("Property Storage"),
        kind: FieldKind::Select(STORE_OPTIONS),
    },
    FieldSpec {
        name: "sensitive",
        label: Some("Sensitive Data"),
        kind: FieldKind::Switch,
    },
    FieldSpec {
        name: "disableObjectCreation",
        label: Some("Creation Disabled"),
        kind: FieldKind::Switch,
    },
    FieldSpec {
        name: "disableManualCreation",
        label: Some("Manual Entry Restricted"),
        kind: FieldKind::Switch,
    },
    FieldSpec {
        name: "allowConcurrentEditing",
        label: Some("Concurrent Editing"),
        kind: FieldKind::Switch,
    },
    FieldSpec {
        name: "notes",
        label: Some("Internal Notes"),
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "inputPackage",
        label: Some("Input Package Path"),
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "retentionPolicy",
        label: Some("Retention Cycle"),
        kind: FieldKind::Select(RETENTION_OPTIONS),
    },
    FieldSpec {
        name: "icon",
        label: Some("Icon Set"),
        kind: FieldKind::Select(ICON_OPTIONS),
    },
    FieldSpec {
        name: "createFolders",
        label: Some("Folder Creation Pattern"),
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "exclusiveFolder",
        label: Some("Locked to Scope"),
        kind: FieldKind::Select(EXCLUSIVE_OPTIONS),
    },
    FieldSpec {
        name: "listInfo",
        label: Some("System List Binding"),
        kind: FieldKind::Select(LIST_INFO_OPTIONS),
    },
    FieldSpec {
        // No mapped label: exports show the raw field name.
        name: "handler",
        label: None,
        kind: FieldKind::Select(HANDLER_OPTIONS),
    },
    FieldSpec {
        name: "insertProc",
        label: Some("Entry Logic Proc"),
        kind: FieldKind::Select(INSERT_PROC_OPTIONS),
    },
    FieldSpec {
        name: "deleteProc",
        label: Some("Exit Logic Proc"),
        kind: FieldKind::Select(DELETE_PROC_OPTIONS),
    },
    FieldSpec {
        name: "searchScreen",
        label: Some("Search Scope"),
        kind: FieldKind::Select(SEARCH_SCREEN_OPTIONS),
    },
    FieldSpec {
        name: "resultScreen",
        label: Some("Results View"),
        kind: FieldKind::Select(RESULT_SCREEN_OPTIONS),
    },
    FieldSpec {
        name: "treeAction",
        label: Some("Context Action"),
        kind: FieldKind::Select(TREE_ACTION_OPTIONS),
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static FieldSpec>> =
    Lazy::new(|| REGISTRY.iter().map(|spec| (spec.name, spec)).collect());

/// Look up a field spec by wire name.
pub fn spec(name: &str) -> Option<&'static FieldSpec> {
    BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryRecord;

    #[test]
    fn registry_matches_the_record_shape() {
        let record = CategoryRecord::default();
        for field in REGISTRY {
            assert!(
                record.get(field.name).is_some(),
                "registry field '{}' missing from the record",
                field.name
            );
        }
        assert_eq!(REGISTRY.len(), 23);
    }

    #[test]
    fn unmapped_label_falls_back_to_field_name() {
        let handler = spec("handler").unwrap();
        assert_eq!(handler.label(), "handler");
        assert_eq!(spec("sensitive").unwrap().label(), "Sensitive Data");
    }

    #[test]
    fn lookup_by_name() {
        assert!(spec("objectNaming").is_some());
        assert!(spec("object_naming").is_none());
        assert!(spec("bogus").is_none());
    }
}
