//! Declarative field validation for the write paths that carry one.
//!
//! Every validator returns either the trimmed/normalized value set or a
//! field-keyed map of human-readable messages. Nothing in here panics and
//! nothing reaches the network.

mod contact;
mod profile;
mod skill;

pub use contact::{validate_contact, ContactData};
pub use profile::{validate_profile, ProfileData, ProfileInput};
pub use skill::{validate_skill, SkillCategory, SkillData};

use std::collections::BTreeMap;

/// Field name -> human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        // First message per field wins, matching how the schemas short-circuit.
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.errors
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Treats the empty string as "absent", the way optional form fields submit.
pub(crate) fn normalize_optional(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "too short");
        errors.add("name", "bad characters");

        assert_eq!(errors.get("name"), Some("too short"));
    }

    #[test]
    fn to_json_is_field_keyed() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Please enter a valid email address");

        let json = errors.to_json();
        assert_eq!(json["email"], "Please enter a valid email address");
    }

    #[test]
    fn normalize_optional_treats_blank_as_absent() {
        assert_eq!(normalize_optional(Some("  ")), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some(" hi ")), Some("hi".to_string()));
    }
}
