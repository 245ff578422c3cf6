use rand::Rng;
use serde::{Deserialize, Serialize};

/// The one resource type this tool manages. Read-only at the UI level.
pub const RECORD_TYPE: &str = "Document";

const ID_PREFIX: &str = "CAT-";

/// A document category record.
///
/// The field set is closed: records are stored with exactly these keys
/// (camelCase on the wire) and deserialization rejects anything else, so a
/// record survives load/save cycles byte-for-byte. Select fields hold their
/// option *value* (e.g. `"auto"`), not the display label; out-of-set values
/// are legal and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CategoryRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub description: String,
    pub object_naming: String,
    pub property_store: String,
    pub sensitive: bool,
    pub disable_object_creation: bool,
    pub disable_manual_creation: bool,
    pub allow_concurrent_editing: bool,
    pub notes: String,
    pub input_package: String,
    pub retention_policy: String,
    pub icon: String,
    pub create_folders: String,
    pub exclusive_folder: String,
    pub list_info: String,
    pub handler: String,
    pub insert_proc: String,
    pub delete_proc: String,
    pub search_screen: String,
    pub result_screen: String,
    pub tree_action: String,
}

impl Default for CategoryRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            record_type: RECORD_TYPE.to_string(),
            name: String::new(),
            description: String::new(),
            object_naming: "empty".to_string(),
            property_store: String::new(),
            sensitive: false,
            disable_object_creation: false,
            disable_manual_creation: false,
            allow_concurrent_editing: false,
            notes: String::new(),
            input_package: String::new(),
            retention_policy: String::new(),
            icon: String::new(),
            create_folders: String::new(),
            exclusive_folder: "no".to_string(),
            list_info: String::new(),
            handler: String::new(),
            insert_proc: String::new(),
            delete_proc: String::new(),
            search_screen: String::new(),
            result_screen: String::new(),
            tree_action: String::new(),
        }
    }
}

/// A single field's value, borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl CategoryRecord {
    /// A fresh draft: documented defaults plus a generated id.
    pub fn new_draft() -> Self {
        Self {
            id: generate_id(),
            ..Self::default()
        }
    }

    /// Derive a decoupled copy. Everything except id and name passes through
    /// verbatim.
    pub fn copy(&self) -> Self {
        Self {
            id: format!("{}-COPY", self.id),
            name: format!("{} (Copy)", self.name),
            ..self.clone()
        }
    }

    /// Look up a field by its wire name.
    pub fn get(&self, field: &str) -> Option<FieldValue<'_>> {
        use FieldValue::{Flag, Text};
        Some(match field {
            "id" => Text(&self.id),
            "type" => Text(&self.record_type),
            "name" => Text(&self.name),
            "description" => Text(&self.description),
            "objectNaming" => Text(&self.object_naming),
            "propertyStore" => Text(&self.property_store),
            "sensitive" => Flag(self.sensitive),
            "disableObjectCreation" => Flag(self.disable_object_creation),
            "disableManualCreation" => Flag(self.disable_manual_creation),
            "allowConcurrentEditing" => Flag(self.allow_concurrent_editing),
            "notes" => Text(&self.notes),
            "inputPackage" => Text(&self.input_package),
            "retentionPolicy" => Text(&self.retention_policy),
            "icon" => Text(&self.icon),
            "createFolders" => Text(&self.create_folders),
            "exclusiveFolder" => Text(&self.exclusive_folder),
            "listInfo" => Text(&self.list_info),
            "handler" => Text(&self.handler),
            "insertProc" => Text(&self.insert_proc),
            "deleteProc" => Text(&self.delete_proc),
            "searchScreen" => Text(&self.search_screen),
            "resultScreen" => Text(&self.result_screen),
            "treeAction" => Text(&self.tree_action),
            _ => return None,
        })
    }

    /// Assign a field by its wire name. Returns false when the name is
    /// unknown or the value kind does not match the field.
    pub fn set(&mut self, field: &str, value: FieldValue<'_>) -> bool {
        use FieldValue::{Flag, Text};
        match (field, value) {
            ("id", Text(v)) => self.id = v.to_string(),
            ("type", Text(v)) => self.record_type = v.to_string(),
            ("name", Text(v)) => self.name = v.to_string(),
            ("description", Text(v)) => self.description = v.to_string(),
            ("objectNaming", Text(v)) => self.object_naming = v.to_string(),
            ("propertyStore", Text(v)) => self.property_store = v.to_string(),
            ("sensitive", Flag(v)) => self.sensitive = v,
            ("disableObjectCreation", Flag(v)) => self.disable_object_creation = v,
            ("disableManualCreation", Flag(v)) => self.disable_manual_creation = v,
            ("allowConcurrentEditing", Flag(v)) => self.allow_concurrent_editing = v,
            ("notes", Text(v)) => self.notes = v.to_string(),
            ("inputPackage", Text(v)) => self.input_package = v.to_string(),
            ("retentionPolicy", Text(v)) => self.retention_policy = v.to_string(),
            ("icon", Text(v)) => self.icon = v.to_string(),
            ("createFolders", Text(v)) => self.create_folders = v.to_string(),
            ("exclusiveFolder", Text(v)) => self.exclusive_folder = v.to_string(),
            ("listInfo", Text(v)) => self.list_info = v.to_string(),
            ("handler", Text(v)) => self.handler = v.to_string(),
            ("insertProc", Text(v)) => self.insert_proc = v.to_string(),
            ("deleteProc", Text(v)) => self.delete_proc = v.to_string(),
            ("searchScreen", Text(v)) => self.search_screen = v.to_string(),
            ("resultScreen", Text(v)) => self.result_screen = v.to_string(),
            ("treeAction", Text(v)) => self.tree_action = v.to_string(),
            _ => return false,
        }
        true
    }
}

fn generate_id() -> String {
    format!("{}{}", ID_PREFIX, rand::thread_rng().gen_range(0..10_000))
}
