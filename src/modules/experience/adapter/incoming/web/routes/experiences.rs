use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::experience::application::ports::incoming::ExperienceError;
use crate::modules::experience::application::ports::outgoing::ExperienceData;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{normalize_optional, ValidationErrors};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ExperienceBody {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub experience_type: Option<String>,
    pub color: Option<String>,
}

fn validate_body(body: ExperienceBody) -> Result<ExperienceData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let company = body.company.trim().to_string();
    if company.is_empty() {
        errors.add("company", "Company is required");
    } else if company.len() > 150 {
        errors.add("company", "Company must be less than 150 characters");
    }

    let position = body.position.trim().to_string();
    if position.is_empty() {
        errors.add("position", "Position is required");
    } else if position.len() > 150 {
        errors.add("position", "Position must be less than 150 characters");
    }

    let duration = body.duration.trim().to_string();
    if duration.is_empty() {
        errors.add("duration", "Duration is required");
    } else if duration.len() > 100 {
        errors.add("duration", "Duration must be less than 100 characters");
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

    Ok(ExperienceData {
        company,
        position,
        duration,
        location: normalize_optional(body.location.as_deref()),
        description,
        technologies,
        experience_type: normalize_optional(body.experience_type.as_deref()),
        color: normalize_optional(body.color.as_deref()),
    })
}

#[get("/api/experiences")]
pub async fn list_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Listing experiences failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    user: AuthenticatedUser,
    body: web::Json<ExperienceBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data.experience.create.execute(user.user_id, payload).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => {
            error!("Creating experience failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<ExperienceBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match validate_body(body.into_inner()) {
        Ok(p) => p,
        Err(errors) => return ApiResponse::validation_failed(errors.to_json()),
    };

    match data
        .experience
        .update
        .execute(user.user_id, path.into_inner(), payload)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(ExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(e) => {
            error!("Updating experience failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(ExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(e) => {
            error!("Deleting experience failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    use crate::modules::experience::application::ports::incoming::{
        CreateExperienceUseCase, ListExperiencesUseCase,
    };
    use crate::modules::experience::application::ports::outgoing::ExperienceRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{bearer_token, test_token_provider};

    struct MockList {
        rows: Vec<ExperienceRecord>,
    }

    #[async_trait]
    impl ListExperiencesUseCase for MockList {
        async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError> {
            Ok(self.rows.clone())
        }
    }

    struct MockCreate;

    #[async_trait]
    impl CreateExperienceUseCase for MockCreate {
        async fn execute(
            &self,
            owner: Uuid,
            data: ExperienceData,
        ) -> Result<ExperienceRecord, ExperienceError> {
            Ok(ExperienceRecord {
                id: Uuid::new_v4(),
                user_id: owner,
                company: data.company,
                position: data.position,
                duration: data.duration,
                location: data.location,
                description: data.description,
                technologies: data.technologies,
                experience_type: data.experience_type,
                color: data.color,
                order_index: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn list_is_public() {
        let app_state = TestAppStateBuilder::default()
            .with_list_experiences_use_case(MockList { rows: vec![] })
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_experiences_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn blank_company_is_a_field_error() {
        let tokens = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_create_experience_use_case(MockCreate)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(tokens.clone()))
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .insert_header(("Authorization", bearer_token(&tokens, Uuid::new_v4())))
            .set_json(json!({
                "company": " ",
                "position": "Dev",
                "duration": "2024",
                "description": "Work"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["fields"]["company"], "Company is required");
    }

    #[actix_web::test]
    async fn create_scopes_row_to_token_owner() {
        let tokens = test_token_provider();
        let owner = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_create_experience_use_case(MockCreate)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(tokens.clone()))
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .insert_header(("Authorization", bearer_token(&tokens, owner)))
            .set_json(json!({
                "company": "Acme",
                "position": "Dev",
                "duration": "2024",
                "description": "Work",
                "user_id": Uuid::new_v4()
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user_id"], owner.to_string());
    }
}
