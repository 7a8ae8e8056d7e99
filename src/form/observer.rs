use crate::form::response::ResponseMap;

/// Receives every response change: the field that changed, the full
/// response set and whether the form is currently valid. Used to enable or
/// disable a submit action.
pub trait FormObserver: Send {
    fn on_change(&mut self, field_id: &str, responses: &ResponseMap, is_valid: bool);
}

impl<F> FormObserver for F
where
    F: FnMut(&str, &ResponseMap, bool) + Send,
{
    fn on_change(&mut self, field_id: &str, responses: &ResponseMap, is_valid: bool) {
        self(field_id, responses, is_valid)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
