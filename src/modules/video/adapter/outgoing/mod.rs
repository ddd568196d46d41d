pub mod sea_orm_entity;
pub mod video_repository_postgres;
