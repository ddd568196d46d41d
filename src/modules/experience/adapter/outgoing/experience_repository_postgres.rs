use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{self as experiences, Column, Entity};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: experiences::Model) -> ExperienceRecord {
    ExperienceRecord {
        id: model.id,
        user_id: model.user_id,
        company: model.company,
        position: model.position,
        duration: model.duration,
        location: model.location,
        description: model.description,
        technologies: model.technologies,
        experience_type: model.experience_type,
        color: model.color,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: sea_orm::DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list_all(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        Entity::find()
            .order_by_desc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_record).collect())
            .map_err(db_err)
    }

    async fn count_for(&self, owner: Uuid) -> Result<u64, ExperienceRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert(
        &self,
        owner: Uuid,
        data: ExperienceData,
        order_index: i32,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let active = experiences::ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            company: Set(data.company),
            position: Set(data.position),
            duration: Set(data.duration),
            location: Set(data.location),
            description: Set(data.description),
            technologies: Set(data.technologies),
            experience_type: Set(data.experience_type),
            color: Set(data.color),
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
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.company = Set(data.company);
        active.position = Set(data.position);
        active.duration = Set(data.duration);
        active.location = Set(data.location);
        active.description = Set(data.description);
        active.technologies = Set(data.technologies);
        active.experience_type = Set(data.experience_type);
        active.color = Set(data.color);

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}
