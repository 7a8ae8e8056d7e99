use std::fmt;
use std::sync::{Arc, Mutex};

use crate::form::field_model::{FieldDefinition, FieldKind};
use crate::form::identity::{FieldId, IdentityMode, assign_ids};
use crate::form::observer::{FormObserver, SubscriptionId};
use crate::form::response::{ResponseMap, ResponseValue};
use crate::form::validation::FieldError;

/// The engine is not internally synchronized; a multi-threaded host puts
/// the whole thing behind one lock. Observers run while that lock is held,
/// so an observer must never lock the same shared engine.
pub type SharedFormEngine = Arc<Mutex<DynamicFormEngine>>;

/// Holds the field definitions of one form and the answers collected so far.
///
/// Lifecycle:
/// 1. `configure()` installs a definition list and drops every prior answer
/// 2. `set_response()` records answers and notifies observers
/// 3. `validate_and_collect_errors()` on submit, `snapshot_responses()` to hand the answers off
pub struct DynamicFormEngine {
    fields: Vec<FieldDefinition>,
    /// Position -> identifier
    ids: Vec<FieldId>,
    mode: IdentityMode,
    responses: ResponseMap,
    is_valid: bool,
    observers: Vec<(SubscriptionId, Box<dyn FormObserver>)>,
    next_subscription: u64,
}

impl DynamicFormEngine {
    pub fn new() -> Self {
        Self::with_identity(IdentityMode::Positional)
    }

    pub fn with_identity(mode: IdentityMode) -> Self {
        DynamicFormEngine {
            fields: Vec::new(),
            ids: Vec::new(),
            mode,
            responses: ResponseMap::new(),
            is_valid: true,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ---- Configuration ----

    /// Replace the definition list. All previous responses are discarded.
    pub fn configure(&mut self, fields: Vec<FieldDefinition>) {
        self.ids = assign_ids(&fields, self.mode);
        self.fields = fields;
        self.responses.clear();
        self.is_valid = self.validate();
    }

    /// Switch identity mode. Takes effect on the next `configure`.
    pub fn set_identity_mode(&mut self, mode: IdentityMode) {
        self.mode = mode;
    }

    pub fn identity_mode(&self) -> IdentityMode {
        self.mode
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field_ids(&self) -> &[FieldId] {
        &self.ids
    }

    pub fn field_id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn index_of(&self, field_id: &str) -> Option<usize> {
        self.ids.iter().position(|id| id == field_id)
    }

    // ---- Responses ----

    /// Store or overwrite the response for `field_id`, recompute validity
    /// and notify observers.
    ///
    /// Identifiers that match no configured field are kept in the response
    /// set but never affect validity.
    pub fn set_response(&mut self, field_id: impl Into<FieldId>, value: ResponseValue) {
        let field_id = field_id.into();
        self.responses.insert(field_id.clone(), value);
        self.is_valid = self.validate();

        let is_valid = self.is_valid;
        for (_, observer) in self.observers.iter_mut() {
            observer.on_change(&field_id, &self.responses, is_valid);
        }
    }

    pub fn response(&self, field_id: &str) -> Option<&ResponseValue> {
        self.responses.get(field_id)
    }

    /// Owned copy of every stored response, including ones for unknown ids.
    pub fn snapshot_responses(&self) -> ResponseMap {
        self.responses.clone()
    }

    /// Give every required checkbox group without an answer an empty
    /// selection, marking it as shown but not yet ticked. Returns how many
    /// fields were seeded. Observers are not notified.
    pub fn seed_defaults(&mut self) -> usize {
        let mut seeded = 0;
        for (field, id) in self.fields.iter().zip(&self.ids) {
            if field.kind == FieldKind::CheckboxGroup
                && field.is_required
                && !self.responses.contains_key(id)
            {
                self.responses
                    .insert(id.clone(), ResponseValue::empty_selection());
                seeded += 1;
            }
        }
        self.is_valid = self.validate();
        seeded
    }

    // ---- Validation ----

    /// Aggregate validity as of the last change.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// True iff every required field has a present response.
    pub fn validate(&self) -> bool {
        self.fields
            .iter()
            .zip(&self.ids)
            .all(|(field, id)| !field.is_required || self.is_answered(id))
    }

    /// Walk every field and report each required one that is unanswered,
    /// in definition order.
    pub fn validate_and_collect_errors(&self) -> (bool, Vec<FieldError>) {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .zip(&self.ids)
            .enumerate()
            .filter(|(_, (field, id))| field.is_required && !self.is_answered(id))
            .map(|(index, (_, id))| FieldError::incomplete(index, id.clone()))
            .collect();

        (errors.is_empty(), errors)
    }

    /// Fields whose stored value has a shape their kind can't produce.
    /// Advisory only.
    pub fn shape_mismatches(&self) -> Vec<FieldError> {
        self.fields
            .iter()
            .zip(&self.ids)
            .enumerate()
            .filter_map(|(index, (field, id))| {
                let value = self.responses.get(id)?;
                if field.kind.accepts(value) {
                    None
                } else {
                    Some(FieldError::new(
                        index,
                        id.clone(),
                        format!(
                            "{} response does not fit a {} field",
                            value.kind_name(),
                            field.kind.as_str()
                        ),
                    ))
                }
            })
            .collect()
    }

    /// Text answers outside their field's advisory bounds. Advisory only.
    pub fn constraint_warnings(&self) -> Vec<FieldError> {
        let mut warnings = Vec::new();
        for (index, (field, id)) in self.fields.iter().zip(&self.ids).enumerate() {
            let (Some(constraints), Some(ResponseValue::Text(text))) =
                (field.constraints.as_ref(), self.responses.get(id))
            else {
                continue;
            };
            for message in constraints.violations(text) {
                warnings.push(FieldError::new(index, id.clone(), message));
            }
        }
        warnings
    }

    fn is_answered(&self, field_id: &str) -> bool {
        self.responses
            .get(field_id)
            .map_or(false, ResponseValue::is_present)
    }

    // ---- Observers ----

    /// Observers are called synchronously from `set_response`. Behind a
    /// `SharedFormEngine` they run under its lock and must not re-lock it.
    pub fn subscribe(&mut self, observer: impl FormObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Wrap in `Arc<Mutex<_>>`. See `subscribe` for the re-entrancy rule.
    pub fn into_shared(self) -> SharedFormEngine {
        Arc::new(Mutex::new(self))
    }
}

impl Default for DynamicFormEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DynamicFormEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicFormEngine")
            .field("fields", &self.fields)
            .field("ids", &self.ids)
            .field("mode", &self.mode)
            .field("responses", &self.responses)
            .field("is_valid", &self.is_valid)
            .field("observers", &self.observers.len())
            .finish()
    }
}
