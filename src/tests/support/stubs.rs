//! Default stand-ins for every use case. Tests swap in a real mock for the
//! handler under test; everything else answers with "not used in this test".

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::incoming::{
    LoginError, LoginRequest, LoginResponse, LoginUseCase, RefreshError, RefreshResponse,
    RefreshTokenUseCase,
};
use crate::modules::contact::application::ports::incoming::{
    SendContactEmailError, SendContactEmailUseCase,
};
use crate::modules::experience::application::ports::incoming::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{ExperienceData, ExperienceRecord};
use crate::modules::functions::application::ports::incoming::{
    GithubStatsFunctionError, GithubStatsFunctionUseCase, YoutubeDataFunctionError,
    YoutubeDataFunctionUseCase,
};
use crate::modules::functions::application::ports::outgoing::{GithubStats, VideoMetadata};
use crate::modules::post::application::ports::incoming::{
    CreatePostUseCase, DeletePostUseCase, GetPublishedPostUseCase, ListAllPostsUseCase,
    ListPublishedPostsUseCase, PostError, UpdatePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{PostData, PostRecord};
use crate::modules::profile::application::ports::incoming::{
    GetProfileError, GetProfileUseCase, UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRecord;
use crate::modules::project::application::ports::incoming::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, ProjectError,
    RefreshProjectStatsError, RefreshProjectStatsUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectData, ProjectRecord};
use crate::modules::skill::application::ports::incoming::{
    CreateFeaturedSkillError, CreateFeaturedSkillUseCase, CreateSkillUseCase,
    DeleteFeaturedSkillUseCase, DeleteSkillUseCase, ListFeaturedSkillsUseCase, ListSkillsUseCase,
    SkillError, UpdateFeaturedSkillUseCase, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    FeaturedSkillData, FeaturedSkillRecord, SkillRecord,
};
use crate::shared::validation::SkillData;
use crate::modules::storage::application::ports::incoming::{
    CreateUploadError, CreateUploadUseCase, UploadRequest, UploadTicket,
};
use crate::modules::video::application::ports::incoming::{
    CreateVideoUseCase, DeleteVideoUseCase, ListVideosUseCase, RefreshVideoMetadataError,
    RefreshVideoMetadataUseCase, ReorderVideosError, ReorderVideosUseCase, UpdateVideoUseCase,
    VideoError,
};
use crate::modules::video::application::ports::outgoing::{VideoData, VideoRecord};
use crate::shared::validation::{ContactData, ProfileData};

const UNUSED: &str = "not used in this test";

// ── auth ────────────────────────────────────────────────────────────────

pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<RefreshResponse, RefreshError> {
        Err(RefreshError::InvalidToken)
    }
}

// ── profile ─────────────────────────────────────────────────────────────

pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<ProfileRecord, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

pub struct StubUpsertProfileUseCase;

#[async_trait]
impl UpsertProfileUseCase for StubUpsertProfileUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _data: ProfileData,
    ) -> Result<ProfileRecord, UpsertProfileError> {
        Err(UpsertProfileError::RepositoryError(UNUSED.to_string()))
    }
}

// ── skill ───────────────────────────────────────────────────────────────

pub struct StubListSkillsUseCase;

#[async_trait]
impl ListSkillsUseCase for StubListSkillsUseCase {
    async fn execute(&self) -> Result<Vec<SkillRecord>, SkillError> {
        Ok(vec![])
    }
}

pub struct StubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(&self, _owner: Uuid, _data: SkillData) -> Result<SkillRecord, SkillError> {
        Err(SkillError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateSkillUseCase;

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkillUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _data: SkillData,
    ) -> Result<SkillRecord, SkillError> {
        Err(SkillError::NotFound)
    }
}

pub struct StubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _owner: Uuid, _id: Uuid) -> Result<(), SkillError> {
        Err(SkillError::NotFound)
    }
}

pub struct StubListFeaturedSkillsUseCase;

#[async_trait]
impl ListFeaturedSkillsUseCase for StubListFeaturedSkillsUseCase {
    async fn execute(&self) -> Result<Vec<FeaturedSkillRecord>, SkillError> {
        Ok(vec![])
    }
}

pub struct StubCreateFeaturedSkillUseCase;

#[async_trait]
impl CreateFeaturedSkillUseCase for StubCreateFeaturedSkillUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, CreateFeaturedSkillError> {
        Err(CreateFeaturedSkillError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateFeaturedSkillUseCase;

#[async_trait]
impl UpdateFeaturedSkillUseCase for StubUpdateFeaturedSkillUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _data: FeaturedSkillData,
    ) -> Result<FeaturedSkillRecord, SkillError> {
        Err(SkillError::NotFound)
    }
}

pub struct StubDeleteFeaturedSkillUseCase;

#[async_trait]
impl DeleteFeaturedSkillUseCase for StubDeleteFeaturedSkillUseCase {
    async fn execute(&self, _owner: Uuid, _id: Uuid) -> Result<(), SkillError> {
        Err(SkillError::NotFound)
    }
}

// ── experience ──────────────────────────────────────────────────────────

pub struct StubListExperiencesUseCase;

#[async_trait]
impl ListExperiencesUseCase for StubListExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ExperienceError> {
        Ok(vec![])
    }
}

pub struct StubCreateExperienceUseCase;

#[async_trait]
impl CreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceError> {
        Err(ExperienceError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl UpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceError> {
        Err(ExperienceError::NotFound)
    }
}

pub struct StubDeleteExperienceUseCase;

#[async_trait]
impl DeleteExperienceUseCase for StubDeleteExperienceUseCase {
    async fn execute(&self, _owner: Uuid, _id: Uuid) -> Result<(), ExperienceError> {
        Err(ExperienceError::NotFound)
    }
}

// ── project ─────────────────────────────────────────────────────────────

pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
        Ok(vec![])
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _data: ProjectData,
    ) -> Result<ProjectRecord, ProjectError> {
        Err(ProjectError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _data: ProjectData,
    ) -> Result<ProjectRecord, ProjectError> {
        Err(ProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _owner: Uuid, _id: Uuid) -> Result<(), ProjectError> {
        Err(ProjectError::NotFound)
    }
}

pub struct StubRefreshProjectStatsUseCase;

#[async_trait]
impl RefreshProjectStatsUseCase for StubRefreshProjectStatsUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
    ) -> Result<ProjectRecord, RefreshProjectStatsError> {
        Err(RefreshProjectStatsError::NotFound)
    }
}

// ── video ───────────────────────────────────────────────────────────────

pub struct StubListVideosUseCase;

#[async_trait]
impl ListVideosUseCase for StubListVideosUseCase {
    async fn execute(&self) -> Result<Vec<VideoRecord>, VideoError> {
        Ok(vec![])
    }
}

pub struct StubCreateVideoUseCase;

#[async_trait]
impl CreateVideoUseCase for StubCreateVideoUseCase {
    async fn execute(&self, _owner: Uuid, _data: VideoData) -> Result<VideoRecord, VideoError> {
        Err(VideoError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdateVideoUseCase;

#[async_trait]
impl UpdateVideoUseCase for StubUpdateVideoUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _data: VideoData,
    ) -> Result<VideoRecord, VideoError> {
        Err(VideoError::NotFound)
    }
}

pub struct StubDeleteVideoUseCase;

#[async_trait]
impl DeleteVideoUseCase for StubDeleteVideoUseCase {
    async fn execute(&self, _owner: Uuid, _id: Uuid) -> Result<(), VideoError> {
        Err(VideoError::NotFound)
    }
}

pub struct StubReorderVideosUseCase;

#[async_trait]
impl ReorderVideosUseCase for StubReorderVideosUseCase {
    async fn execute(&self, _owner: Uuid, _ids: Vec<Uuid>) -> Result<(), ReorderVideosError> {
        Err(ReorderVideosError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubRefreshVideoMetadataUseCase;

#[async_trait]
impl RefreshVideoMetadataUseCase for StubRefreshVideoMetadataUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
    ) -> Result<VideoRecord, RefreshVideoMetadataError> {
        Err(RefreshVideoMetadataError::NotFound)
    }
}

// ── post ────────────────────────────────────────────────────────────────

pub struct StubListPublishedPostsUseCase;

#[async_trait]
impl ListPublishedPostsUseCase for StubListPublishedPostsUseCase {
    async fn execute(&self) -> Result<Vec<PostRecord>, PostError> {
        Ok(vec![])
    }
}

pub struct StubGetPublishedPostUseCase;

#[async_trait]
impl GetPublishedPostUseCase for StubGetPublishedPostUseCase {
    async fn execute(&self, _id: Uuid) -> Result<PostRecord, PostError> {
        Err(PostError::NotFound)
    }
}

pub struct StubListAllPostsUseCase;

#[async_trait]
impl ListAllPostsUseCase for StubListAllPostsUseCase {
    async fn execute(&self) -> Result<Vec<PostRecord>, PostError> {
        Ok(vec![])
    }
}

pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _owner: Uuid, _data: PostData) -> Result<PostRecord, PostError> {
        Err(PostError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubUpdatePostUseCase;

#[async_trait]
impl UpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _data: PostData,
    ) -> Result<PostRecord, PostError> {
        Err(PostError::NotFound)
    }
}

pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _owner: Uuid, _id: Uuid) -> Result<(), PostError> {
        Err(PostError::NotFound)
    }
}

// ── functions ───────────────────────────────────────────────────────────

pub struct StubGithubStatsFunctionUseCase;

#[async_trait]
impl GithubStatsFunctionUseCase for StubGithubStatsFunctionUseCase {
    async fn execute(&self, _github_url: &str) -> Result<GithubStats, GithubStatsFunctionError> {
        Err(GithubStatsFunctionError::UpstreamError(UNUSED.to_string()))
    }
}

pub struct StubYoutubeDataFunctionUseCase;

#[async_trait]
impl YoutubeDataFunctionUseCase for StubYoutubeDataFunctionUseCase {
    async fn execute(
        &self,
        _youtube_url: &str,
    ) -> Result<VideoMetadata, YoutubeDataFunctionError> {
        Err(YoutubeDataFunctionError::UpstreamError(UNUSED.to_string()))
    }
}

// ── contact ─────────────────────────────────────────────────────────────

pub struct StubSendContactEmailUseCase;

#[async_trait]
impl SendContactEmailUseCase for StubSendContactEmailUseCase {
    async fn execute(&self, _message: ContactData) -> Result<(), SendContactEmailError> {
        Err(SendContactEmailError::SendFailed(UNUSED.to_string()))
    }
}

// ── storage ─────────────────────────────────────────────────────────────

pub struct StubCreateUploadUseCase;

#[async_trait]
impl CreateUploadUseCase for StubCreateUploadUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _request: UploadRequest,
    ) -> Result<UploadTicket, CreateUploadError> {
        Err(CreateUploadError::SignFailed(UNUSED.to_string()))
    }
}
