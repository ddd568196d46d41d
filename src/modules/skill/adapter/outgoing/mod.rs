pub mod featured_skill_repository_postgres;
pub mod sea_orm_entity;
pub mod skill_repository_postgres;
