use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatcfgError, Result};
use crate::fields::{self, FieldKind};
use crate::model::{CategoryRecord, FieldValue};

#[derive(Debug, Clone)]
pub struct FieldAssignment {
    pub field: String,
    pub value: String,
}

impl FieldAssignment {
    pub fn new(field: String, value: String) -> Self {
        Self { field, value }
    }
}

/// Apply field assignments to the draft. Select values outside the option
/// set are stored verbatim with a warning; switches require a boolean;
/// read-only fields are refused.
pub fn run(draft: &CategoryRecord, assignments: &[FieldAssignment]) -> Result<CmdResult> {
    let mut updated = draft.clone();
    let mut result = CmdResult::default();

    for assignment in assignments {
        let spec = fields::spec(&assignment.field)
            .ok_or_else(|| CatcfgError::Api(format!("Unknown field: {}", assignment.field)))?;

        let value = match spec.kind {
            FieldKind::ReadOnly => {
                return Err(CatcfgError::Api(format!(
                    "Field '{}' is read-only",
                    spec.name
                )));
            }
            FieldKind::Switch => {
                let flag = parse_flag(&assignment.value).ok_or_else(|| {
                    CatcfgError::Api(format!(
                        "Field '{}' takes a boolean, got '{}'",
                        spec.name, assignment.value
                    ))
                })?;
                FieldValue::Flag(flag)
            }
            FieldKind::Select(options) => {
                if !options.iter().any(|opt| opt.value == assignment.value) {
                    result.add_message(CmdMessage::warning(format!(
                        "'{}' is not a listed option for {}; storing as-is",
                        assignment.value, spec.name
                    )));
                }
                FieldValue::Text(&assignment.value)
            }
            FieldKind::Text => FieldValue::Text(&assignment.value),
        };

        if !updated.set(spec.name, value) {
            return Err(CatcfgError::MalformedRecord(format!(
                "field '{}' cannot hold the given value",
                spec.name
            )));
        }
    }

    let edited: Vec<&str> = assignments.iter().map(|a| a.field.as_str()).collect();
    result.add_message(CmdMessage::success(format!("Updated: {}", edited.join(", "))));
    result.draft = Some(updated);
    Ok(result)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
