use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::identity::FieldId;

/// Responses keyed by field identifier.
pub type ResponseMap = BTreeMap<FieldId, ResponseValue>;

/// The value a user has given for one field.
///
/// Untagged so response files can use plain YAML/JSON scalars:
/// `null`, `true`, `3`, `"text"`, `["a", "b"]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    #[default]
    Absent,
    Flag(bool),
    Number(f64),
    Text(String),
    Selection(BTreeSet<String>),
}

impl ResponseValue {
    pub fn selection<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResponseValue::Selection(items.into_iter().map(Into::into).collect())
    }

    pub fn empty_selection() -> Self {
        ResponseValue::Selection(BTreeSet::new())
    }

    /// Whether this value counts as an answer for a required field.
    ///
    /// An unchecked box and a zero count are not answers: a required
    /// acknowledgment must be ticked and a required count must be nonzero.
    /// NaN and infinities have no portable encoding and never count.
    pub fn is_present(&self) -> bool {
        match self {
            ResponseValue::Absent => false,
            ResponseValue::Flag(checked) => *checked,
            ResponseValue::Number(n) => n.is_finite() && *n != 0.0,
            ResponseValue::Text(text) => !text.trim().is_empty(),
            ResponseValue::Selection(items) => !items.is_empty(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ResponseValue::Absent => "absent",
            ResponseValue::Flag(_) => "flag",
            ResponseValue::Number(_) => "number",
            ResponseValue::Text(_) => "text",
            ResponseValue::Selection(_) => "selection",
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Absent => write!(f, "(none)"),
            ResponseValue::Flag(checked) => write!(f, "{}", checked),
            ResponseValue::Number(n) => write!(f, "{}", n),
            ResponseValue::Text(text) => write!(f, "\"{}\"", text),
            ResponseValue::Selection(items) => {
                let joined: Vec<&str> = items.iter().map(String::as_str).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}

impl From<&str> for ResponseValue {
    fn from(text: &str) -> Self {
        ResponseValue::Text(text.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(text: String) -> Self {
        ResponseValue::Text(text)
    }
}

impl From<bool> for ResponseValue {
    fn from(checked: bool) -> Self {
        ResponseValue::Flag(checked)
    }
}

impl From<f64> for ResponseValue {
    fn from(n: f64) -> Self {
        ResponseValue::Number(n)
    }
}

impl From<i64> for ResponseValue {
    fn from(n: i64) -> Self {
        ResponseValue::Number(n as f64)
    }
}

impl From<BTreeSet<String>> for ResponseValue {
    fn from(items: BTreeSet<String>) -> Self {
        ResponseValue::Selection(items)
    }
}

impl<T: Into<ResponseValue>> From<Option<T>> for ResponseValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ResponseValue::Absent)
    }
}
