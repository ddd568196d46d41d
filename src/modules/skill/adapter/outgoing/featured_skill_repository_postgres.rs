use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::featured_skills::{
    self, Column, Entity,
};
use crate::modules::skill::application::ports::outgoing::{
    FeaturedSkillData, FeaturedSkillRecord, FeaturedSkillRepository, SkillRepositoryError,
};

#[derive(Clone)]
pub struct FeaturedSkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeaturedSkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: featured_skills::Model) -> FeaturedSkillRecord {
    FeaturedSkillRecord {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        description: model.description,
        technologies: model.technologies,
        image_url: model.image_url,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: sea_orm::DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FeaturedSkillRepository for FeaturedSkillRepositoryPostgres {
    async fn list_all(&self) -> Result<Vec<FeaturedSkillRecord>, SkillRepositoryError> {
        Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_record).collect())
            .map_err(db_err)
    }

    async fn count_for(&self, owner: Uuid) -> Result<u64, SkillRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert(
        &self,
        owner: Uuid,
        data: FeaturedSkillData,
        order_index: i32,
    ) -> Result<FeaturedSkillRecord, SkillRepositoryError> {
        let active = featured_skills::ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            title: Set(data.title),
            description: Set(data.description),
            technologies: Set(data.technologies),
            image_url: Set(data.image_url),
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
        data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, SkillRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.title = Set(data.title);
        active.description = Set(data.description);
        active.technologies = Set(data.technologies);
        active.image_url = Set(data.image_url);

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}
