use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::incoming::{LoginUseCase, RefreshTokenUseCase};
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::use_cases::AuthUseCases;
use crate::modules::contact::application::ports::incoming::SendContactEmailUseCase;
use crate::modules::contact::application::use_cases::ContactUseCases;
use crate::modules::experience::application::ports::incoming::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::use_cases::ExperienceUseCases;
use crate::modules::functions::application::ports::incoming::{
    GithubStatsFunctionUseCase, YoutubeDataFunctionUseCase,
};
use crate::modules::functions::application::use_cases::FunctionUseCases;
use crate::modules::post::application::ports::incoming::{
    CreatePostUseCase, DeletePostUseCase, GetPublishedPostUseCase, ListAllPostsUseCase,
    ListPublishedPostsUseCase, UpdatePostUseCase,
};
use crate::modules::post::application::use_cases::PostUseCases;
use crate::modules::profile::application::ports::incoming::{
    GetProfileUseCase, UpsertProfileUseCase,
};
use crate::modules::profile::application::use_cases::ProfileUseCases;
use crate::modules::project::application::ports::incoming::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, RefreshProjectStatsUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::{
    CreateFeaturedSkillUseCase, CreateSkillUseCase, DeleteFeaturedSkillUseCase,
    DeleteSkillUseCase, ListFeaturedSkillsUseCase, ListSkillsUseCase, UpdateFeaturedSkillUseCase,
    UpdateSkillUseCase,
};
use crate::modules::skill::application::use_cases::SkillUseCases;
use crate::modules::storage::application::ports::incoming::CreateUploadUseCase;
use crate::modules::storage::application::use_cases::StorageUseCases;
use crate::modules::video::application::ports::incoming::{
    CreateVideoUseCase, DeleteVideoUseCase, ListVideosUseCase, RefreshVideoMetadataUseCase,
    ReorderVideosUseCase, UpdateVideoUseCase,
};
use crate::modules::video::application::use_cases::VideoUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Real token service with a fixed test secret; handlers verify tokens the
/// same way they do in production.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    let config = JwtConfig {
        secret_key: "test-secret-key-with-at-least-32-chars!".to_string(),
        issuer: "Portfolio".to_string(),
        access_token_expiry: 1800,
        refresh_token_expiry: 604800,
    };

    Arc::new(JwtTokenService::new(config))
}

pub fn bearer_token(tokens: &Arc<dyn TokenProvider + Send + Sync>, user_id: Uuid) -> String {
    let token = tokens
        .generate_access_token(user_id)
        .expect("test token generation");

    format!("Bearer {}", token)
}

pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    profile: ProfileUseCases,
    skill: SkillUseCases,
    experience: ExperienceUseCases,
    project: ProjectUseCases,
    video: VideoUseCases,
    post: PostUseCases,
    functions: FunctionUseCases,
    contact: ContactUseCases,
    storage: StorageUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                refresh: Arc::new(StubRefreshTokenUseCase),
            },
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase),
                upsert: Arc::new(StubUpsertProfileUseCase),
            },
            skill: SkillUseCases {
                list: Arc::new(StubListSkillsUseCase),
                create: Arc::new(StubCreateSkillUseCase),
                update: Arc::new(StubUpdateSkillUseCase),
                delete: Arc::new(StubDeleteSkillUseCase),
                list_featured: Arc::new(StubListFeaturedSkillsUseCase),
                create_featured: Arc::new(StubCreateFeaturedSkillUseCase),
                update_featured: Arc::new(StubUpdateFeaturedSkillUseCase),
                delete_featured: Arc::new(StubDeleteFeaturedSkillUseCase),
            },
            experience: ExperienceUseCases {
                list: Arc::new(StubListExperiencesUseCase),
                create: Arc::new(StubCreateExperienceUseCase),
                update: Arc::new(StubUpdateExperienceUseCase),
                delete: Arc::new(StubDeleteExperienceUseCase),
            },
            project: ProjectUseCases {
                list: Arc::new(StubListProjectsUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
                refresh_stats: Arc::new(StubRefreshProjectStatsUseCase),
            },
            video: VideoUseCases {
                list: Arc::new(StubListVideosUseCase),
                create: Arc::new(StubCreateVideoUseCase),
                update: Arc::new(StubUpdateVideoUseCase),
                delete: Arc::new(StubDeleteVideoUseCase),
                reorder: Arc::new(StubReorderVideosUseCase),
                refresh_metadata: Arc::new(StubRefreshVideoMetadataUseCase),
            },
            post: PostUseCases {
                list_published: Arc::new(StubListPublishedPostsUseCase),
                get_published: Arc::new(StubGetPublishedPostUseCase),
                list_all: Arc::new(StubListAllPostsUseCase),
                create: Arc::new(StubCreatePostUseCase),
                update: Arc::new(StubUpdatePostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
            },
            functions: FunctionUseCases {
                github_stats: Arc::new(StubGithubStatsFunctionUseCase),
                youtube_data: Arc::new(StubYoutubeDataFunctionUseCase),
            },
            contact: ContactUseCases {
                send: Arc::new(StubSendContactEmailUseCase),
            },
            storage: StorageUseCases {
                create_upload: Arc::new(StubCreateUploadUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_use_case(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_use_case(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_get_profile_use_case(
        mut self,
        uc: impl GetProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile_use_case(
        mut self,
        uc: impl UpsertProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.upsert = Arc::new(uc);
        self
    }

    pub fn with_list_skills_use_case(
        mut self,
        uc: impl ListSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.list = Arc::new(uc);
        self
    }

    pub fn with_create_skill_use_case(
        mut self,
        uc: impl CreateSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill_use_case(
        mut self,
        uc: impl UpdateSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill_use_case(
        mut self,
        uc: impl DeleteSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn with_list_featured_skills_use_case(
        mut self,
        uc: impl ListFeaturedSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.list_featured = Arc::new(uc);
        self
    }

    pub fn with_create_featured_skill_use_case(
        mut self,
        uc: impl CreateFeaturedSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.create_featured = Arc::new(uc);
        self
    }

    pub fn with_update_featured_skill_use_case(
        mut self,
        uc: impl UpdateFeaturedSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.update_featured = Arc::new(uc);
        self
    }

    pub fn with_delete_featured_skill_use_case(
        mut self,
        uc: impl DeleteFeaturedSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.delete_featured = Arc::new(uc);
        self
    }

    pub fn with_list_experiences_use_case(
        mut self,
        uc: impl ListExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.list = Arc::new(uc);
        self
    }

    pub fn with_create_experience_use_case(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience_use_case(
        mut self,
        uc: impl UpdateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience_use_case(
        mut self,
        uc: impl DeleteExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    pub fn with_list_projects_use_case(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_create_project_use_case(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project_use_case(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project_use_case(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_refresh_project_stats_use_case(
        mut self,
        uc: impl RefreshProjectStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.refresh_stats = Arc::new(uc);
        self
    }

    pub fn with_list_videos_use_case(
        mut self,
        uc: impl ListVideosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.list = Arc::new(uc);
        self
    }

    pub fn with_create_video_use_case(
        mut self,
        uc: impl CreateVideoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.create = Arc::new(uc);
        self
    }

    pub fn with_update_video_use_case(
        mut self,
        uc: impl UpdateVideoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.update = Arc::new(uc);
        self
    }

    pub fn with_delete_video_use_case(
        mut self,
        uc: impl DeleteVideoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.delete = Arc::new(uc);
        self
    }

    pub fn with_reorder_videos_use_case(
        mut self,
        uc: impl ReorderVideosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.reorder = Arc::new(uc);
        self
    }

    pub fn with_refresh_video_metadata_use_case(
        mut self,
        uc: impl RefreshVideoMetadataUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.refresh_metadata = Arc::new(uc);
        self
    }

    pub fn with_list_published_posts_use_case(
        mut self,
        uc: impl ListPublishedPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.list_published = Arc::new(uc);
        self
    }

    pub fn with_get_published_post_use_case(
        mut self,
        uc: impl GetPublishedPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.get_published = Arc::new(uc);
        self
    }

    pub fn with_list_all_posts_use_case(
        mut self,
        uc: impl ListAllPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.list_all = Arc::new(uc);
        self
    }

    pub fn with_create_post_use_case(
        mut self,
        uc: impl CreatePostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_update_post_use_case(
        mut self,
        uc: impl UpdatePostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post_use_case(
        mut self,
        uc: impl DeletePostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    pub fn with_github_stats_use_case(
        mut self,
        uc: impl GithubStatsFunctionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.functions.github_stats = Arc::new(uc);
        self
    }

    pub fn with_youtube_data_use_case(
        mut self,
        uc: impl YoutubeDataFunctionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.functions.youtube_data = Arc::new(uc);
        self
    }

    pub fn with_send_contact_email_use_case(
        mut self,
        uc: impl SendContactEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.send = Arc::new(uc);
        self
    }

    pub fn with_create_upload_use_case(
        mut self,
        uc: impl CreateUploadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.storage.create_upload = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            profile: self.profile,
            skill: self.skill,
            experience: self.experience,
            project: self.project,
            video: self.video,
            post: self.post,
            functions: self.functions,
            contact: self.contact,
            storage: self.storage,
        })
    }
}
