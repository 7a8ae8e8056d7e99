use serde::{Deserialize, Serialize};

use crate::form::engine::DynamicFormEngine;
use crate::form::error::FormError;
use crate::form::field_model::FieldDefinition;
use crate::form::identity::IdentityMode;

/// A form as written in a YAML file.
///
/// ```yaml
/// name: Summer picnic RSVP
/// identity: positional
/// fields:
///   - kind: radio_group
///     title: Will you attend?
///     required: true
///     options: [Yes, No, Maybe]
///   - kind: number_input
///     title: Guests
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    /// Human-readable name for this form
    pub name: String,

    /// How field identifiers are derived
    #[serde(default)]
    pub identity: IdentityMode,

    /// Ordered questions
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FormSpec {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FormError> {
        serde_yaml::from_str(yaml).map_err(|source| FormError::Yaml {
            context: "form spec".to_string(),
            source,
        })
    }

    pub fn to_yaml_string(&self) -> Result<String, FormError> {
        serde_yaml::to_string(self).map_err(|source| FormError::Yaml {
            context: format!("serializing form '{}'", self.name),
            source,
        })
    }

    /// Every structural problem, as `(field index, reason)`.
    pub fn issues(&self) -> Vec<(usize, String)> {
        self.fields
            .iter()
            .enumerate()
            .flat_map(|(index, field)| {
                field
                    .definition_issues()
                    .into_iter()
                    .map(move |reason| (index, reason))
            })
            .collect()
    }

    /// Fails on the first structural problem.
    pub fn check(&self) -> Result<(), FormError> {
        match self.issues().into_iter().next() {
            Some((index, reason)) => Err(FormError::InvalidDefinition { index, reason }),
            None => Ok(()),
        }
    }

    /// A fresh engine configured with this form's fields.
    pub fn build_engine(&self) -> DynamicFormEngine {
        let mut engine = DynamicFormEngine::with_identity(self.identity);
        engine.configure(self.fields.clone());
        engine
    }
}

/// Load a form spec from a YAML file.
pub fn load_form_spec(path: &str) -> Result<FormSpec, FormError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| FormError::Yaml {
        context: path.to_string(),
        source,
    })
}
