use crate::form::engine::DynamicFormEngine;
use crate::form::response::ResponseMap;
use crate::form::validation::FieldError;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A previous submit has not finished yet
    AlreadySubmitting,

    /// Required fields are unanswered. Submit stays available.
    Rejected {
        errors: Vec<FieldError>,
        /// Index of the field to bring into view
        first_invalid: usize,
    },

    /// The answers to transmit
    Accepted(ResponseMap),
}

/// Drives submission for one form and owns its double-submit guard.
#[derive(Debug)]
pub struct SubmissionWorkflow {
    engine: DynamicFormEngine,
    is_submitting: bool,
}

impl SubmissionWorkflow {
    pub fn new(engine: DynamicFormEngine) -> Self {
        SubmissionWorkflow {
            engine,
            is_submitting: false,
        }
    }

    pub fn engine(&self) -> &DynamicFormEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DynamicFormEngine {
        &mut self.engine
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether a submit button bound to this workflow should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.engine.is_valid()
    }

    /// Validate every field and, if the form is complete, hand back the
    /// answers and hold the guard until `finish()`.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting {
            return SubmitOutcome::AlreadySubmitting;
        }

        let (valid, errors) = self.engine.validate_and_collect_errors();
        match errors.first().map(|e| e.index) {
            Some(first_invalid) if !valid => SubmitOutcome::Rejected {
                errors,
                first_invalid,
            },
            _ => {
                self.is_submitting = true;
                SubmitOutcome::Accepted(self.engine.snapshot_responses())
            }
        }
    }

    /// Release the guard once transmission has completed or failed.
    pub fn finish(&mut self) {
        self.is_submitting = false;
    }
}
