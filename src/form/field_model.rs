use serde::{Deserialize, Serialize};

use crate::form::response::ResponseValue;

// ============================================================================
// Static description of the questions a form asks
// ============================================================================

/// The input widget a field is rendered as. Determines which response
/// shapes the field can legally hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    TextInput,
    NumberInput,
    TextArea,
    Dropdown,
    RadioGroup,
    CheckboxGroup,
}

impl FieldKind {
    /// Choice kinds carry an option list; free-entry kinds don't.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldKind::Dropdown | FieldKind::RadioGroup | FieldKind::CheckboxGroup
        )
    }

    /// Whether a stored response has a shape this kind can produce.
    ///
    /// Number inputs also accept raw text because the entry widget hands
    /// over what was typed before it is parsed. A checkbox group with a
    /// single box reports a plain flag.
    pub fn accepts(&self, value: &ResponseValue) -> bool {
        match (self, value) {
            (_, ResponseValue::Absent) => true,
            (FieldKind::TextInput, ResponseValue::Text(_)) => true,
            (FieldKind::TextArea, ResponseValue::Text(_)) => true,
            (FieldKind::Dropdown, ResponseValue::Text(_)) => true,
            (FieldKind::RadioGroup, ResponseValue::Text(_)) => true,
            (FieldKind::NumberInput, ResponseValue::Number(_)) => true,
            (FieldKind::NumberInput, ResponseValue::Text(_)) => true,
            (FieldKind::CheckboxGroup, ResponseValue::Selection(_)) => true,
            (FieldKind::CheckboxGroup, ResponseValue::Flag(_)) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::TextInput => "text_input",
            FieldKind::NumberInput => "number_input",
            FieldKind::TextArea => "text_area",
            FieldKind::Dropdown => "dropdown",
            FieldKind::RadioGroup => "radio_group",
            FieldKind::CheckboxGroup => "checkbox_group",
        }
    }
}

/// Advisory bounds on free-text answers. Reported, never enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lines: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
}

impl FieldConstraints {
    /// Check a text answer against the bounds. Returns one message per
    /// violated bound.
    pub fn violations(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let length = text.chars().count();
        let lines = text.lines().count();

        if let Some(min) = self.min_length {
            if length < min {
                out.push(format!(
                    "text is {} characters, shorter than minimum {}",
                    length, min
                ));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                out.push(format!(
                    "text is {} characters, longer than maximum {}",
                    length, max
                ));
            }
        }
        if let Some(min) = self.min_lines {
            if lines < min {
                out.push(format!("text has {} lines, fewer than minimum {}", lines, min));
            }
        }
        if let Some(max) = self.max_lines {
            if lines > max {
                out.push(format!("text has {} lines, more than maximum {}", lines, max));
            }
        }

        out
    }

    /// Bounds where the minimum exceeds the maximum.
    pub fn inverted_bounds(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                out.push(format!("min_length {} exceeds max_length {}", min, max));
            }
        }
        if let (Some(min), Some(max)) = (self.min_lines, self.max_lines) {
            if min > max {
                out.push(format!("min_lines {} exceeds max_lines {}", min, max));
            }
        }
        out
    }
}

/// One form question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub kind: FieldKind,

    /// Display label. Presentation only.
    pub title: String,

    #[serde(default, alias = "required")]
    pub is_required: bool,

    /// Ordered choices for dropdown, radio and checkbox groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<FieldConstraints>,

    /// Caller-chosen identifier, honoured in stable identity mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl FieldDefinition {
    pub fn new(kind: FieldKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            is_required: false,
            options: Vec::new(),
            constraints: None,
            key: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Structural problems with this definition, independent of any answer.
    pub fn definition_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.kind.is_choice() && self.options.is_empty() {
            issues.push(format!("{} requires at least one option", self.kind.as_str()));
        }
        if !self.kind.is_choice() && !self.options.is_empty() {
            issues.push(format!(
                "{} does not take options ({} given)",
                self.kind.as_str(),
                self.options.len()
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                issues.push(format!("duplicate option '{}'", option));
            }
        }

        if let Some(ref constraints) = self.constraints {
            issues.extend(constraints.inverted_bounds());
        }

        if let Some(ref key) = self.key {
            if key.trim().is_empty() {
                issues.push("key must not be blank".to_string());
            }
        }

        issues
    }
}
