use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::skill::application::ports::incoming::{
    CreateFeaturedSkillError, SkillError, FEATURED_SKILL_LIMIT,
};
use crate::modules::skill::application::ports::outgoing::FeaturedSkillData;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{normalize_optional, ValidationErrors};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FeaturedSkillBody {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
}

fn validate_body(body: FeaturedSkillBody) -> Result<FeaturedSkillData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = body.title.trim().to_string();
    if title.is_empty() {
        errors.add("title", "Title is required");
    } else if title.len() > 150 {
        errors.add("title", "Title must be less than 150 characters");
    }

    let description = body.description.trim().to_string();
    if description.is_empty() {
        errors.add("description", "Description is required");
    }

    let technologies: Vec<String> = body
        .technologies
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(FeaturedSkillData {
        title,
        description,
        technologies,
        image_url: normalize_optional(body.image_url.as_deref()),
    })
}

#[get("/api/featured-skills")]
pub async fn list_featured_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list_featured.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Listing featured skills failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/featured-skills")]
pub async fn create_featured_skill_handler(
    user: AuthenticatedUser,
    body: web::Json<FeaturedSkillBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.skill.create_featured.execute(user.user_id, payload).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateFeaturedSkillError::LimitReached) => ApiResponse::conflict(
            "FEATURED_LIMIT_REACHED",
            &format!("At most {} featured skills are allowed", FEATURED_SKILL_LIMIT),
        ),
        Err(e) => {
            error!("Creating featured skill failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/featured-skills/{id}")]
pub async fn update_featured_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<FeaturedSkillBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .skill
        .update_featured
        .execute(user.user_id, path.into_inner(), payload)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(SkillError::NotFound) => {
            ApiResponse::not_found("FEATURED_SKILL_NOT_FOUND", "Featured skill not found")
        }
        Err(e) => {
            error!("Updating featured skill failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/featured-skills/{id}")]
pub async fn delete_featured_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill
        .delete_featured
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SkillError::NotFound) => {
            ApiResponse::not_found("FEATURED_SKILL_NOT_FOUND", "Featured skill not found")
        }
        Err(e) => {
            error!("Deleting featured skill failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
