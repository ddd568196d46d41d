pub mod featured_skill_service;
pub mod skill_service;

pub use featured_skill_service::FeaturedSkillService;
pub use skill_service::SkillService;
