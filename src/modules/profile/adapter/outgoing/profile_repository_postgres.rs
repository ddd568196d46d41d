use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    self as profiles, Column, Entity,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRecord, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::validation::ProfileData;

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: profiles::Model) -> ProfileRecord {
    ProfileRecord {
        id: model.id,
        user_id: model.user_id,
        display_name: model.display_name,
        bio: model.bio,
        about_me: model.about_me,
        my_story: model.my_story,
        location: model.location,
        phone_number: model.phone_number,
        email_contact: model.email_contact,
        avatar_url: model.avatar_url,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
        instagram_url: model.instagram_url,
        semester: model.semester,
        years_coding: model.years_coding,
        projects_count: model.projects_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn apply_data(active: &mut profiles::ActiveModel, data: ProfileData) {
    active.display_name = Set(data.display_name);
    active.bio = Set(data.bio);
    active.about_me = Set(data.about_me);
    active.my_story = Set(data.my_story);
    active.location = Set(data.location);
    active.phone_number = Set(data.phone_number);
    active.email_contact = Set(data.email_contact);
    active.avatar_url = Set(data.avatar_url);
    active.github_url = Set(data.github_url);
    active.linkedin_url = Set(data.linkedin_url);
    active.twitter_url = Set(data.twitter_url);
    active.instagram_url = Set(data.instagram_url);
    active.semester = Set(data.semester);
    active.years_coding = Set(data.years_coding);
    active.projects_count = Set(data.projects_count);
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_display_profile(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map(|m| m.map(model_to_record))
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
    }

    async fn upsert(
        &self,
        owner: Uuid,
        data: ProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let existing = Entity::find()
            .filter(Column::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        let saved = match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                apply_data(&mut active, data);
                active
                    .update(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
            None => {
                let mut active = profiles::ActiveModel {
                    id: NotSet,
                    user_id: Set(owner),
                    created_at: NotSet,
                    updated_at: NotSet,
                    ..Default::default()
                };
                apply_data(&mut active, data);
                active
                    .insert(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
        };

        Ok(model_to_record(saved))
    }
}
