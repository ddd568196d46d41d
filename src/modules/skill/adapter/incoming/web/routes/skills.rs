use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::skill::application::ports::incoming::SkillError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::validate_skill;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillBody {
    pub name: String,
    pub category: String,
    pub proficiency_level: i32,
}

#[get("/api/skills")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Listing skills failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    user: AuthenticatedUser,
    body: web::Json<SkillBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let skill = match validate_skill(&body.name, &body.category, body.proficiency_level) {
        Ok(s) => s,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.skill.create.execute(user.user_id, skill).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => {
            error!("Creating skill failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<SkillBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let skill = match validate_skill(&body.name, &body.category, body.proficiency_level) {
        Ok(s) => s,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .skill
        .update
        .execute(user.user_id, path.into_inner(), skill)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(SkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(e) => {
            error!("Updating skill failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(e) => {
            error!("Deleting skill failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
