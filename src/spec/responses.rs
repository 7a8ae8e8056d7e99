use serde_yaml::{Mapping, Value};

use crate::form::engine::DynamicFormEngine;
use crate::form::error::FormError;
use crate::form::identity::FieldId;
use crate::form::response::ResponseValue;

/// One recorded answer, as it appears in a responses file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry {
    pub field_id: FieldId,
    pub value: ResponseValue,
}

/// Parse a YAML mapping of field id -> value, keeping file order so the
/// entries can be replayed the way a user would have entered them.
///
/// ```yaml
/// field_0: Jane Doe
/// field_1: 2
/// field_2: [Vegetarian, Nut-free]
/// field_3: true
/// ```
pub fn parse_responses(yaml: &str) -> Result<Vec<ResponseEntry>, FormError> {
    let mapping: Mapping = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        serde_yaml::from_str(yaml).map_err(|source| FormError::Yaml {
            context: "responses".to_string(),
            source,
        })?
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let field_id = match key {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(FormError::InvalidResponse {
                    key: format!("{:?}", other),
                    reason: "keys must be field identifiers".to_string(),
                });
            }
        };
        let value: ResponseValue =
            serde_yaml::from_value(value).map_err(|e| FormError::InvalidResponse {
                key: field_id.clone(),
                reason: e.to_string(),
            })?;
        if let ResponseValue::Number(n) = &value {
            if !n.is_finite() {
                return Err(FormError::InvalidResponse {
                    key: field_id,
                    reason: format!("number {} is not finite", n),
                });
            }
        }
        entries.push(ResponseEntry { field_id, value });
    }

    Ok(entries)
}

pub fn load_responses(path: &str) -> Result<Vec<ResponseEntry>, FormError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_responses(&content)
}

/// Feed entries to the engine in order.
pub fn replay(engine: &mut DynamicFormEngine, entries: &[ResponseEntry]) {
    for entry in entries {
        engine.set_response(entry.field_id.clone(), entry.value.clone());
    }
}
