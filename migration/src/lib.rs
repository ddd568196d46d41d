pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_profiles_table;
mod m20250901_000003_create_skills_table;
mod m20250901_000004_create_featured_skills_table;
mod m20250901_000005_create_experiences_table;
mod m20250901_000006_create_projects_table;
mod m20250901_000007_create_videos_table;
mod m20250901_000008_create_posts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_profiles_table::Migration),
            Box::new(m20250901_000003_create_skills_table::Migration),
            Box::new(m20250901_000004_create_featured_skills_table::Migration),
            Box::new(m20250901_000005_create_experiences_table::Migration),
            Box::new(m20250901_000006_create_projects_table::Migration),
            Box::new(m20250901_000007_create_videos_table::Migration),
            Box::new(m20250901_000008_create_posts_table::Migration),
        ]
    }
}
