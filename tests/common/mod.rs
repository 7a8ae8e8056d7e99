#![allow(dead_code)]

use std::path::PathBuf;

use rsvp_form::{FieldConstraints, FieldDefinition, FieldKind};

/// A typical event RSVP: name, attendance, guest count, dietary needs, notes.
pub fn rsvp_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new(FieldKind::TextInput, "Full name").required(),
        FieldDefinition::new(FieldKind::RadioGroup, "Will you attend?")
            .required()
            .with_options(["Yes", "No", "Maybe"]),
        FieldDefinition::new(FieldKind::NumberInput, "Number of guests"),
        FieldDefinition::new(FieldKind::CheckboxGroup, "Dietary requirements")
            .with_options(["Vegetarian", "Vegan", "Nut-free"]),
        FieldDefinition::new(FieldKind::TextArea, "Notes").with_constraints(FieldConstraints {
            min_length: None,
            max_length: Some(20),
            min_lines: None,
            max_lines: Some(2),
        }),
    ]
}

pub const RSVP_YAML: &str = r#"
name: Summer picnic RSVP
fields:
  - kind: text_input
    title: Full name
    required: true
  - kind: radio_group
    title: Will you attend?
    required: true
    options: [Yes, No, Maybe]
  - kind: number_input
    title: Number of guests
  - kind: checkbox_group
    title: I agree to the code of conduct
    required: true
    options: [Agree]
"#;

/// Write `content` to a unique file under the system temp dir.
pub fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "rsvp_form_{}_{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, content).expect("Failed to write temp file");
    path
}
