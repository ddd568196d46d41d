use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::profile::application::ports::incoming::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile has been published yet")
        }

        Err(e) => {
            error!("Fetching profile failed: {}", e);
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
    use serde_json::Value;
    use uuid::Uuid;

    use crate::modules::profile::application::ports::incoming::GetProfileUseCase;
    use crate::modules::profile::application::ports::outgoing::ProfileRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockGetProfile {
        result: Result<ProfileRecord, GetProfileError>,
    }

    #[async_trait]
    impl GetProfileUseCase for MockGetProfile {
        async fn execute(&self) -> Result<ProfileRecord, GetProfileError> {
            self.result.clone()
        }
    }

    fn record() -> ProfileRecord {
        ProfileRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            display_name: Some("Ada".to_string()),
            bio: None,
            about_me: None,
            my_story: None,
            location: Some("Berlin".to_string()),
            phone_number: None,
            email_contact: None,
            avatar_url: None,
            github_url: None,
            linkedin_url: None,
            twitter_url: None,
            instagram_url: None,
            semester: None,
            years_coding: None,
            projects_count: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn returns_profile_without_authentication() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile_use_case(MockGetProfile {
                result: Ok(record()),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["display_name"], "Ada");
    }

    #[actix_web::test]
    async fn missing_profile_is_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile_use_case(MockGetProfile {
                result: Err(GetProfileError::NotFound),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }
}
