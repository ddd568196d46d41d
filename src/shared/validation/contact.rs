use std::sync::LazyLock;

use regex::Regex;

use super::ValidationErrors;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact-form rules: the same bounds are enforced client-side and again by
/// the send-email handler, so this is the single source for both.
pub fn validate_contact(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<ContactData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = name.trim();
    let name_len = name.chars().count();
    if name_len < 2 {
        errors.add("name", "Name must be at least 2 characters");
    } else if name_len > 100 {
        errors.add("name", "Name must be less than 100 characters");
    } else if !NAME_RE.is_match(name) {
        errors.add("name", "Name can only contain letters and spaces");
    }

    let email = email.trim().to_lowercase();
    if !is_email(&email) {
        errors.add("email", "Please enter a valid email address");
    } else if email.len() > 255 {
        errors.add("email", "Email must be less than 255 characters");
    }

    // Bounds count characters, not bytes; non-ASCII text gets the full quota.
    let subject = subject.trim();
    let subject_len = subject.chars().count();
    if subject_len < 3 {
        errors.add("subject", "Subject must be at least 3 characters");
    } else if subject_len > 200 {
        errors.add("subject", "Subject must be less than 200 characters");
    }

    let message = message.trim();
    let message_len = message.chars().count();
    if message_len < 10 {
        errors.add("message", "Message must be at least 10 characters");
    } else if message_len > 2000 {
        errors.add("message", "Message must be less than 2000 characters");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactData {
        name: name.to_string(),
        email,
        subject: subject.to_string(),
        message: message.to_string(),
    })
}

pub(crate) fn is_email(value: &str) -> bool {
    email_address::EmailAddress::is_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<ContactData, ValidationErrors> {
        validate_contact(
            "  Ada Lovelace ",
            "Ada@Example.com",
            "Hello there",
            "I would like to talk about your projects.",
        )
    }

    #[test]
    fn accepts_and_normalizes_valid_input() {
        let data = valid().expect("valid input should pass");
        assert_eq!(data.name, "Ada Lovelace");
        assert_eq!(data.email, "ada@example.com");
        assert_eq!(data.subject, "Hello there");
    }

    #[test]
    fn rejects_short_name() {
        let err = validate_contact("A", "a@b.com", "Subject", "A long enough message")
            .expect_err("one-char name must fail");
        assert_eq!(err.get("name"), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(101);
        let err = validate_contact(&name, "a@b.com", "Subject", "A long enough message")
            .expect_err("101-char name must fail");
        assert_eq!(
            err.get("name"),
            Some("Name must be less than 100 characters")
        );
    }

    #[test]
    fn rejects_non_letter_characters_in_name() {
        let err = validate_contact("R2-D2", "a@b.com", "Subject", "A long enough message")
            .expect_err("digits and dashes must fail");
        assert_eq!(
            err.get("name"),
            Some("Name can only contain letters and spaces")
        );
    }

    #[test]
    fn rejects_invalid_email() {
        let err = validate_contact("Ada", "not-an-email", "Subject", "A long enough message")
            .expect_err("bad email must fail");
        assert!(err.get("email").is_some());
    }

    #[test]
    fn rejects_short_subject_and_message() {
        let err = validate_contact("Ada", "a@b.com", "Hi", "too short").expect_err("must fail");
        assert!(err.get("subject").is_some());
        assert!(err.get("message").is_some());
    }

    #[test]
    fn message_bounds_count_characters_not_bytes() {
        // 1500 two-byte characters: 3000 bytes but well inside the 2000 bound.
        let message = "é".repeat(1500);
        validate_contact("Ada", "a@b.com", "Subject", &message)
            .expect("non-ASCII message inside the bound should pass");

        let message = "é".repeat(2001);
        let err = validate_contact("Ada", "a@b.com", "Subject", &message).expect_err("must fail");
        assert!(err.get("message").is_some());
    }

    #[test]
    fn rejects_overlong_message() {
        let message = "m".repeat(2001);
        let err = validate_contact("Ada", "a@b.com", "Subject", &message).expect_err("must fail");
        assert_eq!(
            err.get("message"),
            Some("Message must be less than 2000 characters")
        );
    }
}
