use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{validate_profile, ProfileInput};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpsertProfileBody {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub my_story: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub email_contact: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub semester: Option<String>,
    pub years_coding: Option<String>,
    pub projects_count: Option<String>,
}

impl From<UpsertProfileBody> for ProfileInput {
    fn from(body: UpsertProfileBody) -> Self {
        ProfileInput {
            display_name: body.display_name,
            bio: body.bio,
            about_me: body.about_me,
            my_story: body.my_story,
            location: body.location,
            phone_number: body.phone_number,
            email_contact: body.email_contact,
            avatar_url: body.avatar_url,
            github_url: body.github_url,
            linkedin_url: body.linkedin_url,
            twitter_url: body.twitter_url,
            instagram_url: body.instagram_url,
            semester: body.semester,
            years_coding: body.years_coding,
            projects_count: body.projects_count,
        }
    }
}

#[put("/api/profile")]
pub async fn upsert_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<UpsertProfileBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input: ProfileInput = body.into_inner().into();

    let profile_data = match validate_profile(&input) {
        Ok(data) => data,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.profile.upsert.execute(user.user_id, profile_data).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => {
            error!("Saving profile failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
