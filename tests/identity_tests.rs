use rsvp_form::form::identity::{assign_ids, content_token, positional_id};
use rsvp_form::{DynamicFormEngine, FieldDefinition, FieldKind, IdentityMode, ResponseValue};

mod common;
use common::rsvp_fields;

#[test]
fn positional_ids_follow_list_order() {
    let ids = assign_ids(&rsvp_fields(), IdentityMode::Positional);
    assert_eq!(
        ids,
        vec!["field_0", "field_1", "field_2", "field_3", "field_4"]
    );
    assert_eq!(positional_id(7), "field_7");
}

#[test]
fn reordering_remaps_positional_answers() {
    let name = FieldDefinition::new(FieldKind::TextInput, "Name").required();
    let notes = FieldDefinition::new(FieldKind::TextArea, "Notes");

    let mut engine = DynamicFormEngine::new();
    engine.configure(vec![name.clone(), notes.clone()]);
    assert_eq!(engine.field_id(0), Some("field_0"));

    engine.configure(vec![notes, name]);
    assert_eq!(engine.index_of("field_0"), Some(0));
    assert_eq!(engine.fields()[0].title, "Notes", "field_0 now names the notes field");
}

#[test]
fn stable_mode_uses_explicit_keys() {
    let fields = vec![
        FieldDefinition::new(FieldKind::TextInput, "Name").with_key("name"),
        FieldDefinition::new(FieldKind::NumberInput, "Guests").with_key("  guests "),
    ];
    let ids = assign_ids(&fields, IdentityMode::Stable);
    assert_eq!(ids, vec!["name", "guests"], "Keys are trimmed");
}

#[test]
fn stable_tokens_survive_reordering() {
    let name = FieldDefinition::new(FieldKind::TextInput, "Name").required();
    let notes = FieldDefinition::new(FieldKind::TextArea, "Notes");

    let forward = assign_ids(&[name.clone(), notes.clone()], IdentityMode::Stable);
    let reversed = assign_ids(&[notes, name], IdentityMode::Stable);

    assert_eq!(forward[0], reversed[1]);
    assert_eq!(forward[1], reversed[0]);
    assert!(forward[0].starts_with("f_"));
    assert_eq!(forward[0].len(), 14, "f_ + 12 hex chars");
}

#[test]
fn content_token_depends_on_kind_title_and_options() {
    let a = FieldDefinition::new(FieldKind::Dropdown, "Meal").with_options(["Fish", "Beef"]);
    let b = FieldDefinition::new(FieldKind::Dropdown, "Meal").with_options(["Fish", "Tofu"]);
    let c = FieldDefinition::new(FieldKind::RadioGroup, "Meal").with_options(["Fish", "Beef"]);
    let a_required = a.clone().required();

    assert_ne!(content_token(&a), content_token(&b));
    assert_ne!(content_token(&a), content_token(&c));
    assert_eq!(content_token(&a), content_token(&a_required), "Required flag is not identity");
}

#[test]
fn stable_duplicates_get_suffixes() {
    let field = FieldDefinition::new(FieldKind::TextInput, "Guest name");
    let fields = vec![
        field.clone(),
        field.clone(),
        field.clone().with_key("host"),
        field.with_key("host"),
    ];
    let ids = assign_ids(&fields, IdentityMode::Stable);

    assert_eq!(ids[1], format!("{}-2", ids[0]));
    assert_eq!(ids[2], "host");
    assert_eq!(ids[3], "host-2");
}

#[test]
fn stable_engine_validates_by_key() {
    let mut engine = DynamicFormEngine::with_identity(IdentityMode::Stable);
    engine.configure(vec![
        FieldDefinition::new(FieldKind::TextInput, "Name").required().with_key("name"),
    ]);

    engine.set_response("field_0", ResponseValue::from("Jane"));
    assert!(!engine.validate(), "Positional id means nothing in stable mode");

    engine.set_response("name", ResponseValue::from("Jane"));
    assert!(engine.validate());
}

#[test]
fn identity_mode_applies_on_next_configure() {
    let mut engine = DynamicFormEngine::new();
    engine.configure(vec![FieldDefinition::new(FieldKind::TextInput, "Name").with_key("name")]);
    engine.set_identity_mode(IdentityMode::Stable);
    assert_eq!(engine.field_id(0), Some("field_0"));

    engine.configure(vec![FieldDefinition::new(FieldKind::TextInput, "Name").with_key("name")]);
    assert_eq!(engine.identity_mode(), IdentityMode::Stable);
    assert_eq!(engine.field_id(0), Some("name"));
}
