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
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // One profile row per user (upsert keyed on user_id).
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::DisplayName).string_len(100))
                    .col(ColumnDef::new(Profiles::Bio).string_len(500))
                    .col(ColumnDef::new(Profiles::AboutMe).string_len(1000))
                    .col(ColumnDef::new(Profiles::MyStory).text())
                    .col(ColumnDef::new(Profiles::Location).string_len(100))
                    .col(ColumnDef::new(Profiles::PhoneNumber).string_len(20))
                    .col(ColumnDef::new(Profiles::EmailContact).string_len(255))
                    .col(ColumnDef::new(Profiles::AvatarUrl).text())
                    .col(ColumnDef::new(Profiles::GithubUrl).text())
                    .col(ColumnDef::new(Profiles::LinkedinUrl).text())
                    .col(ColumnDef::new(Profiles::TwitterUrl).text())
                    .col(ColumnDef::new(Profiles::InstagramUrl).text())
                    .col(ColumnDef::new(Profiles::Semester).string_len(50))
                    .col(ColumnDef::new(Profiles::YearsCoding).string_len(50))
                    .col(ColumnDef::new(Profiles::ProjectsCount).string_len(50))
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
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
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles;")
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    UserId,
    DisplayName,
    Bio,
    AboutMe,
    MyStory,
    Location,
    PhoneNumber,
    EmailContact,
    AvatarUrl,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    InstagramUrl,
    Semester,
    YearsCoding,
    ProjectsCount,
    CreatedAt,
    UpdatedAt,
}
