use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::modules::functions::application::ports::outgoing::VideoMetadata;
use crate::modules::video::adapter::outgoing::sea_orm_entity::{self as videos, Column, Entity};
use crate::modules::video::application::ports::outgoing::{
    VideoData, VideoRecord, VideoRepository, VideoRepositoryError,
};

#[derive(Clone)]
pub struct VideoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VideoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: videos::Model) -> VideoRecord {
    VideoRecord {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        description: model.description,
        youtube_url: model.youtube_url,
        youtube_id: model.youtube_id,
        thumbnail_url: model.thumbnail_url,
        duration: model.duration,
        views: model.views,
        likes: model.likes,
        published_at: model.published_at,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: sea_orm::DbErr) -> VideoRepositoryError {
    VideoRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl VideoRepository for VideoRepositoryPostgres {
    async fn list_all(&self) -> Result<Vec<VideoRecord>, VideoRepositoryError> {
        Entity::find()
            .order_by_desc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_record).collect())
            .map_err(db_err)
    }

    async fn find(&self, owner: Uuid, id: Uuid) -> Result<VideoRecord, VideoRepositoryError> {
        Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(model_to_record)
            .ok_or(VideoRepositoryError::NotFound)
    }

    async fn count_for(&self, owner: Uuid) -> Result<u64, VideoRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert(
        &self,
        owner: Uuid,
        data: VideoData,
        order_index: i32,
    ) -> Result<VideoRecord, VideoRepositoryError> {
        let active = videos::ActiveModel {
            id: NotSet,
            user_id: Set(owner),
            title: Set(data.title),
            description: Set(data.description),
            youtube_url: Set(data.youtube_url),
            youtube_id: Set(data.youtube_id),
            thumbnail_url: Set(data.thumbnail_url),
            duration: NotSet,
            views: NotSet,
            likes: NotSet,
            published_at: NotSet,
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
        data: VideoData,
    ) -> Result<VideoRecord, VideoRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(VideoRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.title = Set(data.title);
        active.description = Set(data.description);
        active.youtube_url = Set(data.youtube_url);
        active.youtube_id = Set(data.youtube_id);
        active.thumbnail_url = Set(data.thumbnail_url);

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn set_metadata(
        &self,
        owner: Uuid,
        id: Uuid,
        metadata: VideoMetadata,
    ) -> Result<VideoRecord, VideoRepositoryError> {
        let existing = Entity::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(VideoRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.youtube_id = Set(Some(metadata.video_id));
        active.thumbnail_url = Set(Some(metadata.thumbnail_url));
        active.duration = Set(Some(metadata.duration));
        active.views = Set(Some(metadata.views));
        active.likes = Set(Some(metadata.likes));
        active.published_at = Set(Some(metadata.published_at));

        active.update(&*self.db).await.map(model_to_record).map_err(db_err)
    }

    async fn reorder(&self, owner: Uuid, ids: Vec<Uuid>) -> Result<(), VideoRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let stored: HashSet<Uuid> = Entity::find()
            .filter(Column::UserId.eq(owner))
            .all(&txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let submitted: HashSet<Uuid> = ids.iter().copied().collect();
        if stored != submitted || stored.len() != ids.len() {
            // Rolls back on drop.
            return Err(VideoRepositoryError::OrderMismatch);
        }

        let top = ids.len() as i32 - 1;
        for (position, id) in ids.iter().enumerate() {
            Entity::update_many()
                .col_expr(Column::OrderIndex, Expr::value(top - position as i32))
                .filter(Column::Id.eq(*id))
                .filter(Column::UserId.eq(owner))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), VideoRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(VideoRepositoryError::NotFound);
        }
        Ok(())
    }
}
