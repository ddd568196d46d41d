use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::project::application::ports::incoming::{
    ProjectError, RefreshProjectStatsError,
};
use crate::modules::project::application::ports::outgoing::ProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{normalize_optional, ValidationErrors};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectBody {
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

fn validate_body(body: ProjectBody) -> Result<ProjectData, ValidationErrors> {
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

    Ok(ProjectData {
        title,
        description,
        github_url: normalize_optional(body.github_url.as_deref()),
        demo_url: normalize_optional(body.demo_url.as_deref()),
        image_url: normalize_optional(body.image_url.as_deref()),
        technologies,
        status: normalize_optional(body.status.as_deref())
            .unwrap_or_else(|| "completed".to_string()),
        featured: body.featured,
    })
}

#[get("/api/projects")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Listing projects failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/projects")]
pub async fn create_project_handler(
    user: AuthenticatedUser,
    body: web::Json<ProjectBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.project.create.execute(user.user_id, payload).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => {
            error!("Creating project failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<ProjectBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .project
        .update
        .execute(user.user_id, path.into_inner(), payload)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(ProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(e) => {
            error!("Updating project failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(ProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(e) => {
            error!("Deleting project failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/projects/{id}/refresh-stats")]
pub async fn refresh_project_stats_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .refresh_stats
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(RefreshProjectStatsError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(RefreshProjectStatsError::MissingGithubUrl) => {
            ApiResponse::bad_request("MISSING_GITHUB_URL", "Project has no GitHub URL")
        }
        Err(RefreshProjectStatsError::InvalidGithubUrl) => ApiResponse::bad_request(
            "INVALID_GITHUB_URL",
            "Stored GitHub URL is not a repository URL",
        ),
        Err(e) => {
            error!("Refreshing project stats failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
