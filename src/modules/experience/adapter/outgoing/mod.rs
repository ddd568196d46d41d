pub mod experience_repository_postgres;
pub mod sea_orm_entity;
