use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeaturedSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeaturedSkills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(FeaturedSkills::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(FeaturedSkills::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeaturedSkills::Description).text().not_null())
                    .col(
                        ColumnDef::new(FeaturedSkills::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeaturedSkills::ImageUrl).text())
                    .col(
                        ColumnDef::new(FeaturedSkills::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FeaturedSkills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FeaturedSkills::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_featured_skills_user_id")
                            .from(FeaturedSkills::Table, FeaturedSkills::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_featured_skills_user_id
                ON featured_skills (user_id, order_index);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_featured_skills_updated_at
                BEFORE UPDATE ON featured_skills
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_featured_skills_updated_at ON featured_skills;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FeaturedSkills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FeaturedSkills {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Technologies,
    ImageUrl,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
