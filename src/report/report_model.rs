use serde::{Deserialize, Serialize};

use crate::form::engine::DynamicFormEngine;
use crate::form::validation::FieldError;

// ============================================================================
// Validation report — one form's state at a point in time
// ============================================================================

/// A field-level finding with the field's title attached for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub index: usize,
    pub field_id: String,
    pub title: String,
    pub message: String,
}

/// Everything a reporter needs to describe a form's validation state.
///
/// Built from a configured engine via `from_engine()`. Only `errors`
/// decide validity; shape mismatches and constraint warnings are advisory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub form_name: String,

    pub valid: bool,

    pub field_count: usize,

    pub required_count: usize,

    /// Configured fields holding a present response
    pub answered_count: usize,

    /// Required fields without a present response
    pub errors: Vec<FieldIssue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shape_mismatches: Vec<FieldIssue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraint_warnings: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn from_engine(form_name: &str, engine: &DynamicFormEngine) -> Self {
        let (valid, errors) = engine.validate_and_collect_errors();
        let fields = engine.fields();

        let answered_count = engine
            .field_ids()
            .iter()
            .filter(|id| engine.response(id).is_some_and(|v| v.is_present()))
            .count();

        Self {
            form_name: form_name.to_string(),
            valid,
            field_count: fields.len(),
            required_count: fields.iter().filter(|f| f.is_required).count(),
            answered_count,
            errors: attach_titles(engine, errors),
            shape_mismatches: attach_titles(engine, engine.shape_mismatches()),
            constraint_warnings: attach_titles(engine, engine.constraint_warnings()),
        }
    }

    /// Index of the field a UI should scroll to, if any.
    pub fn first_invalid(&self) -> Option<usize> {
        self.errors.first().map(|e| e.index)
    }
}

fn attach_titles(engine: &DynamicFormEngine, errors: Vec<FieldError>) -> Vec<FieldIssue> {
    errors
        .into_iter()
        .map(|e| FieldIssue {
            title: engine
                .fields()
                .get(e.index)
                .map(|f| f.title.clone())
                .unwrap_or_default(),
            index: e.index,
            field_id: e.field_id,
            message: e.message,
        })
        .collect()
}
