use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::contact::is_email;
use super::{normalize_optional, ValidationErrors};

// E.164-ish: optional leading +, no leading zero, at most 16 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));

/// Raw form values. Every field is optional; the empty string reads as
/// "absent".
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub my_story: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub email_contact: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub semester: Option<String>,
    pub years_coding: Option<String>,
    pub projects_count: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileData {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub my_story: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub email_contact: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub semester: Option<String>,
    pub years_coding: Option<String>,
    pub projects_count: Option<String>,
}

pub fn validate_profile(input: &ProfileInput) -> Result<ProfileData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let display_name = bounded(
        &mut errors,
        "display_name",
        input.display_name.as_deref(),
        100,
        "Display name must be less than 100 characters",
    );
    let bio = bounded(
        &mut errors,
        "bio",
        input.bio.as_deref(),
        500,
        "Bio must be less than 500 characters",
    );
    let about_me = bounded(
        &mut errors,
        "about_me",
        input.about_me.as_deref(),
        1000,
        "About me must be less than 1000 characters",
    );
    let my_story = bounded(
        &mut errors,
        "my_story",
        input.my_story.as_deref(),
        5000,
        "Story must be less than 5000 characters",
    );
    let location = bounded(
        &mut errors,
        "location",
        input.location.as_deref(),
        100,
        "Location must be less than 100 characters",
    );
    let semester = bounded(
        &mut errors,
        "semester",
        input.semester.as_deref(),
        50,
        "Semester must be less than 50 characters",
    );
    let years_coding = bounded(
        &mut errors,
        "years_coding",
        input.years_coding.as_deref(),
        50,
        "Years coding must be less than 50 characters",
    );
    let projects_count = bounded(
        &mut errors,
        "projects_count",
        input.projects_count.as_deref(),
        50,
        "Projects count must be less than 50 characters",
    );

    let phone_number = normalize_optional(input.phone_number.as_deref());
    if let Some(phone) = &phone_number {
        if phone.len() > 20 {
            errors.add(
                "phone_number",
                "Phone number must be less than 20 characters",
            );
        } else if !PHONE_RE.is_match(phone) {
            errors.add("phone_number", "Please enter a valid phone number");
        }
    }

    let email_contact = normalize_optional(input.email_contact.as_deref()).map(|e| e.to_lowercase());
    if let Some(email) = &email_contact {
        if email.len() > 255 {
            errors.add("email_contact", "Email must be less than 255 characters");
        } else if !is_email(email) {
            errors.add("email_contact", "Please enter a valid email address");
        }
    }

    let github_url = social_url(
        &mut errors,
        "github_url",
        input.github_url.as_deref(),
        &["github.com"],
        "GitHub",
    );
    let linkedin_url = social_url(
        &mut errors,
        "linkedin_url",
        input.linkedin_url.as_deref(),
        &["linkedin.com"],
        "LinkedIn",
    );
    let twitter_url = social_url(
        &mut errors,
        "twitter_url",
        input.twitter_url.as_deref(),
        &["twitter.com", "x.com"],
        "Twitter/X",
    );
    let instagram_url = social_url(
        &mut errors,
        "instagram_url",
        input.instagram_url.as_deref(),
        &["instagram.com"],
        "Instagram",
    );

    // The avatar URL is produced by the upload flow, not typed by the user.
    let avatar_url = normalize_optional(input.avatar_url.as_deref());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ProfileData {
        display_name,
        bio,
        about_me,
        my_story,
        location,
        phone_number,
        email_contact,
        avatar_url,
        github_url,
        linkedin_url,
        twitter_url,
        instagram_url,
        semester,
        years_coding,
        projects_count,
    })
}

fn bounded(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    max: usize,
    message: &'static str,
) -> Option<String> {
    let value = normalize_optional(value);
    if let Some(v) = &value {
        // Character count, not byte count; non-ASCII text gets the full quota.
        if v.chars().count() > max {
            errors.add(field, message);
        }
    }
    value
}

fn social_url(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    domains: &[&str],
    label: &str,
) -> Option<String> {
    let value = normalize_optional(value);
    if let Some(raw) = &value {
        if Url::parse(raw).is_err() {
            errors.add(field, format!("Please enter a valid {} URL", label));
        } else if !domains.iter().any(|d| raw.contains(d)) {
            errors.add(field, format!("Must be a {} URL", label));
        }
    }
    value
}
