use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::post::adapter::outgoing::sea_orm_entity::{self as posts, Column, Entity};
use crate::modules::post::application::ports::outgoing::{
    PostData, PostRecord, PostRepository, PostRepositoryError,
};

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: posts::Model) -> PostRecord {
    PostRecord {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        excerpt: model.excerpt,
        content: model.content,
        image_url: model.image_url,
        category: model.category,
        tags: model.tags,
        featured: model.featured,
        published: model.published,
        read_time: model.read_time,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: sea_orm::DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn list_published(&self) -> Result<Vec<PostRecord>, PostRepositoryError> {
        Entity::find()
            .filter(Column::Published.eq(true))
            .order_by_desc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_record).collect())
            .map_err(db_err)
    }

    async fn list_all(&self) -> Result<Vec<PostRecord>, PostRepositoryError> {
        Entity::find()
            .order_by_desc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_record).collect())
            .map_err(db_err)
    }

    async fn find_published(&self, id: Uuid) -> Result<PostRecord, PostRepositoryError> {
        Entity::find_by_id(id)
            .filter(Column::Published.eq(true))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(model_to_record)
            .ok_or(PostRepositoryError::NotFound)
    }

    async fn count_for(&self, owner: Uuid) -> Result<u64, PostRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert(
        &self,
        owner: Uuid,
        data: PostData,
        order_index: i32,
    ) -> Result<PostRecord, PostRepositoryError> {
        let active = posts::ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            title: Set(data.title),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            image_url: Set(data.image_url),
            category: Set(data.category),
            tags: Set(data.tags),
            featured: Set(data.featured),
            published: Set(data.published),
            read_time: Set(data.read_time),
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
        data: PostData,
    ) -> Result<PostRecord, PostRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(PostRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.title = Set(data.title);
        active.excerpt = Set(data.excerpt);
        active.content = Set(data.content);
        active.image_url = Set(data.image_url);
        active.category = Set(data.category);
        active.tags = Set(data.tags);
        active.featured = Set(data.featured);
        active.published = Set(data.published);
        active.read_time = Set(data.read_time);

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), PostRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}
