use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, Column, Entity};
use crate::modules::skill::application::ports::outgoing::{
    SkillRecord, SkillRepository, SkillRepositoryError,
};
use crate::shared::validation::SkillData;

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: skills::Model) -> SkillRecord {
    SkillRecord {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        category: model.category,
        proficiency_level: model.proficiency_level,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: sea_orm::DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list_all(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
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
        data: SkillData,
        order_index: i32,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let active = skills::ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            name: Set(data.name),
            category: Set(data.category.to_string()),
            proficiency_level: Set(data.proficiency_level),
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
        data: SkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.name = Set(data.name);
        active.category = Set(data.category.to_string());
        active.proficiency_level = Set(data.proficiency_level);

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
