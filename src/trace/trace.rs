use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::validation::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEventKind {
    Configured,
    ResponseChanged,
    Validated,
    SubmitAccepted,
    SubmitRejected,
    SubmitBlocked,
}

#[derive(Debug, Serialize)]
pub struct FormEvent {
    pub timestamp_ms: u128,
    pub sequence: u64,

    pub kind: FormEventKind,

    pub form: Option<String>,
    pub field_id: Option<String>,

    pub valid: Option<bool>,
    pub errors: Vec<String>,

    pub detail: Option<String>,
}

impl FormEvent {
    pub fn now(sequence: u64, kind: FormEventKind) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            sequence,
            kind,
            form: None,
            field_id: None,
            valid: None,
            errors: vec![],
            detail: None,
        }
    }

    pub fn with_form(mut self, name: impl ToString) -> Self {
        self.form = Some(name.to_string());
        self
    }

    pub fn with_field(mut self, field_id: impl ToString) -> Self {
        self.field_id = Some(field_id.to_string());
        self
    }

    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    pub fn with_errors(mut self, errors: &[FieldError]) -> Self {
        self.errors = errors
            .iter()
            .map(|e| format!("{}:{}", e.field_id, e.message))
            .collect();
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
