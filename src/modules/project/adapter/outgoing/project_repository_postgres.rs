use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{self as projects, Column, Entity};
use crate::modules::project::application::ports::outgoing::{
    ProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: projects::Model) -> ProjectRecord {
    ProjectRecord {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        description: model.description,
        github_url: model.github_url,
        demo_url: model.demo_url,
        image_url: model.image_url,
        technologies: model.technologies,
        status: model.status,
        featured: model.featured,
        github_stars: model.github_stars,
        github_forks: model.github_forks,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list_all(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        Entity::find()
            .order_by_desc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_record).collect())
            .map_err(db_err)
    }

    async fn find(&self, owner: Uuid, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(model_to_record)
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn count_for(&self, owner: Uuid) -> Result<u64, ProjectRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert(
        &self,
        owner: Uuid,
        data: ProjectData,
        order_index: i32,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let active = projects::ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            title: Set(data.title),
            description: Set(data.description),
            github_url: Set(data.github_url),
            demo_url: Set(data.demo_url),
            image_url: Set(data.image_url),
            technologies: Set(data.technologies),
            status: Set(data.status),
            featured: Set(data.featured),
            github_stars: Set(0),
            github_forks: Set(0),
            order_index: Set(order_index),
            created_at: NotSet,
            updated_at: NotSet,
        };

        active.insert(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.title = Set(data.title);
        active.description = Set(data.description);
        active.github_url = Set(data.github_url);
        active.demo_url = Set(data.demo_url);
        active.image_url = Set(data.image_url);
        active.technologies = Set(data.technologies);
        active.status = Set(data.status);
        active.featured = Set(data.featured);

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn set_stats(
        &self,
        owner: Uuid,
        id: Uuid,
        stars: i32,
        forks: i32,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.github_stars = Set(stars);
        active.github_forks = Set(forks);

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
