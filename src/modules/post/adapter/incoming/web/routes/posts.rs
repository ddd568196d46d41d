use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::PostError;
use crate::modules::post::application::ports::outgoing::PostData;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{normalize_optional, ValidationErrors};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    pub read_time: Option<String>,
}

fn validate_body(body: PostBody) -> Result<PostData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = body.title.trim().to_string();
    if title.is_empty() {
        errors.add("title", "Title is required");
    } else if title.len() > 200 {
        errors.add("title", "Title must be less than 200 characters");
    }

    let content = body.content.trim().to_string();
    if content.is_empty() {
        errors.add("content", "Content is required");
    }

    let tags: Vec<String> = body
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PostData {
        title,
        excerpt: normalize_optional(body.excerpt.as_deref()),
        content,
        image_url: normalize_optional(body.image_url.as_deref()),
        category: normalize_optional(body.category.as_deref()),
        tags,
        featured: body.featured,
        published: body.published,
        read_time: normalize_optional(body.read_time.as_deref()),
    })
}

#[get("/api/posts")]
pub async fn list_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.post.list_published.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Listing posts failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/posts/{id}")]
pub async fn get_post_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.get_published.execute(path.into_inner()).await {
        Ok(post) => ApiResponse::success(post),
        Err(PostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        Err(e) => {
            error!("Fetching post failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Admin view: drafts included.
#[get("/api/admin/posts")]
pub async fn list_all_posts_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.list_all.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Listing all posts failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    body: web::Json<PostBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.post.create.execute(user.user_id, payload).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => {
            error!("Creating post failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/posts/{id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<PostBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .post
        .update
        .execute(user.user_id, path.into_inner(), payload)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        Err(e) => {
            error!("Updating post failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(PostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        Err(e) => {
            error!("Deleting post failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
