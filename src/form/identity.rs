use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::form::field_model::FieldDefinition;

pub type FieldId = String;

/// How field identifiers are derived from a definition list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// `field_<index>`. Reordering the list remaps answers.
    #[default]
    Positional,

    /// The definition's `key`, or a content token when no key is given.
    /// Survives reordering.
    Stable,
}

pub fn positional_id(index: usize) -> FieldId {
    format!("field_{}", index)
}

/// Content-derived token: `f_` + 12 hex chars of SHA-1 over kind, title and options.
pub fn content_token(field: &FieldDefinition) -> FieldId {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(field.kind.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(field.title.as_bytes());
    for option in &field.options {
        hasher.update(b"|");
        hasher.update(option.as_bytes());
    }
    let digest = format!("{:x}", hasher.finalize());
    format!("f_{}", &digest[..12])
}

/// Assign one identifier per definition, in order. The result is the
/// position -> identifier index used for layout.
///
/// In stable mode repeated identifiers get `-2`, `-3`, ... suffixes in
/// definition order so every field stays addressable.
pub fn assign_ids(fields: &[FieldDefinition], mode: IdentityMode) -> Vec<FieldId> {
    match mode {
        IdentityMode::Positional => (0..fields.len()).map(positional_id).collect(),
        IdentityMode::Stable => {
            let mut seen: HashSet<FieldId> = HashSet::new();
            fields
                .iter()
                .map(|field| {
                    let base = match field.key {
                        Some(ref key) if !key.trim().is_empty() => key.trim().to_string(),
                        _ => content_token(field),
                    };
                    let mut id = base.clone();
                    let mut n = 2;
                    while seen.contains(&id) {
                        id = format!("{}-{}", base, n);
                        n += 1;
                    }
                    seen.insert(id.clone());
                    id
                })
                .collect()
        }
    }
}
