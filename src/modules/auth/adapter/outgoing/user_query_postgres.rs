use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::{self as users, Column, Entity};
use crate::modules::auth::application::domain::User;
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_user(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String> {
        Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map(|m| m.map(model_to_user))
            .map_err(|e| e.to_string())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map(|m| m.map(model_to_user))
            .map_err(|e| e.to_string())
    }
}
