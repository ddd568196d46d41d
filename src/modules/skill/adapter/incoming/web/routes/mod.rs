pub mod featured_skills;
pub mod skills;
