use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationErrors;

static SKILL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\+\#\.\-]+$").expect("valid skill name regex"));

/// The fixed category set skills are grouped under for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Design,
    Business,
    Language,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Design => "design",
            SkillCategory::Business => "business",
            SkillCategory::Language => "language",
            SkillCategory::Other => "other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(SkillCategory::Technical),
            "design" => Ok(SkillCategory::Design),
            "business" => Ok(SkillCategory::Business),
            "language" => Ok(SkillCategory::Language),
            "other" => Ok(SkillCategory::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillData {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency_level: i32,
}

pub fn validate_skill(
    name: &str,
    category: &str,
    proficiency_level: i32,
) -> Result<SkillData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = name.trim();
    if name.is_empty() {
        errors.add("name", "Skill name is required");
    } else if name.len() > 50 {
        errors.add("name", "Skill name must be less than 50 characters");
    } else if !SKILL_NAME_RE.is_match(name) {
        errors.add("name", "Skill name contains invalid characters");
    }

    let parsed_category = SkillCategory::from_str(category);
    if parsed_category.is_err() {
        errors.add(
            "category",
            "Category must be one of: technical, design, business, language, other",
        );
    }

    if proficiency_level < 1 {
        errors.add("proficiency_level", "Proficiency level must be at least 1");
    } else if proficiency_level > 5 {
        errors.add("proficiency_level", "Proficiency level must be at most 5");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SkillData {
        name: name.to_string(),
        // Checked above; the error path has already returned.
        category: parsed_category.unwrap_or(SkillCategory::Other),
        proficiency_level,
    })
}
