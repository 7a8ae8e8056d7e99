use serde::{Deserialize, Serialize};

use crate::form::identity::FieldId;

pub const REQUIRED_FIELD_INCOMPLETE: &str = "required field incomplete";

/// A problem attached to one configured field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Position in the definition list
    pub index: usize,
    pub field_id: FieldId,
    pub message: String,
}

impl FieldError {
    pub fn new(index: usize, field_id: impl Into<FieldId>, message: impl Into<String>) -> Self {
        Self {
            index,
            field_id: field_id.into(),
            message: message.into(),
        }
    }

    pub fn incomplete(index: usize, field_id: impl Into<FieldId>) -> Self {
        Self::new(index, field_id, REQUIRED_FIELD_INCOMPLETE)
    }
}
