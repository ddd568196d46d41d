pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::auth::adapter::outgoing::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::service::{LoginService, RefreshTokenService};
use crate::modules::auth::application::use_cases::AuthUseCases;
use crate::modules::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::contact::application::service::ContactEmailService;
use crate::modules::contact::application::use_cases::ContactUseCases;
use crate::modules::experience::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::modules::experience::application::service::ExperienceService;
use crate::modules::experience::application::use_cases::ExperienceUseCases;
use crate::modules::functions::adapter::outgoing::github_stats_reqwest::GithubStatsReqwest;
use crate::modules::functions::adapter::outgoing::youtube_metadata_reqwest::YoutubeMetadataReqwest;
use crate::modules::functions::application::ports::outgoing::{
    GithubStatsQuery, YoutubeMetadataQuery,
};
use crate::modules::functions::application::service::{
    GithubStatsFunctionService, YoutubeDataFunctionService,
};
use crate::modules::functions::application::use_cases::FunctionUseCases;
use crate::modules::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::modules::post::application::service::PostService;
use crate::modules::post::application::use_cases::PostUseCases;
use crate::modules::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::modules::profile::application::service::ProfileService;
use crate::modules::profile::application::use_cases::ProfileUseCases;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::service::{ProjectService, RefreshProjectStatsService};
use crate::modules::project::application::use_cases::ProjectUseCases;
use crate::modules::skill::adapter::outgoing::featured_skill_repository_postgres::FeaturedSkillRepositoryPostgres;
use crate::modules::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::modules::skill::application::service::{FeaturedSkillService, SkillService};
use crate::modules::skill::application::use_cases::SkillUseCases;
use crate::modules::storage::adapter::outgoing::object_store_gcs::GcsObjectStore;
use crate::modules::storage::application::service::UploadService;
use crate::modules::storage::application::use_cases::StorageUseCases;
use crate::modules::video::adapter::outgoing::video_repository_postgres::VideoRepositoryPostgres;
use crate::modules::video::application::service::{RefreshVideoMetadataService, VideoService};
use crate::modules::video::application::use_cases::VideoUseCases;
use crate::shared::api::custom_json_config;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub skill: SkillUseCases,
    pub experience: ExperienceUseCases,
    pub project: ProjectUseCases,
    pub video: VideoUseCases,
    pub post: PostUseCases,
    pub functions: FunctionUseCases,
    pub contact: ContactUseCases,
    pub storage: StorageUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading: .env.{RUST_ENV} first, then .env.
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // SMTP setup
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP_SERVER relay")
    };

    let server_url = format!("{host}:{port}");
    info!("Server runs on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let password_hasher = Argon2Hasher::from_env();

    let auth = AuthUseCases {
        login: Arc::new(LoginService::new(
            user_query,
            Arc::new(password_hasher),
            Arc::clone(&tokens) as Arc<dyn TokenProvider>,
        )),
        refresh: Arc::new(RefreshTokenService::new(
            Arc::clone(&tokens) as Arc<dyn TokenProvider>
        )),
    };

    // Content modules
    let profile_repo = Arc::new(ProfileRepositoryPostgres::new(Arc::clone(&db_arc)));
    let profile_service = Arc::new(ProfileService::new(profile_repo));
    let profile = ProfileUseCases {
        get: profile_service.clone(),
        upsert: profile_service,
    };

    let skill_repo = Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc)));
    let skill_service = Arc::new(SkillService::new(skill_repo));
    let featured_repo = Arc::new(FeaturedSkillRepositoryPostgres::new(Arc::clone(&db_arc)));
    let featured_service = Arc::new(FeaturedSkillService::new(featured_repo));
    let skill = SkillUseCases {
        list: skill_service.clone(),
        create: skill_service.clone(),
        update: skill_service.clone(),
        delete: skill_service,
        list_featured: featured_service.clone(),
        create_featured: featured_service.clone(),
        update_featured: featured_service.clone(),
        delete_featured: featured_service,
    };

    let experience_repo = Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)));
    let experience_service = Arc::new(ExperienceService::new(experience_repo));
    let experience = ExperienceUseCases {
        list: experience_service.clone(),
        create: experience_service.clone(),
        update: experience_service.clone(),
        delete: experience_service,
    };

    // Third-party glue shared by projects, videos and the function routes
    let github: Arc<dyn GithubStatsQuery + Send + Sync> = Arc::new(GithubStatsReqwest::new());
    let youtube_api_key = env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY not set");
    let youtube: Arc<dyn YoutubeMetadataQuery + Send + Sync> =
        Arc::new(YoutubeMetadataReqwest::new(youtube_api_key));

    let project_repo = Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc)));
    let project_service = Arc::new(ProjectService::new(project_repo.clone()));
    let project = ProjectUseCases {
        list: project_service.clone(),
        create: project_service.clone(),
        update: project_service.clone(),
        delete: project_service,
        refresh_stats: Arc::new(RefreshProjectStatsService::new(
            project_repo,
            Arc::clone(&github),
        )),
    };

    let video_repo = Arc::new(VideoRepositoryPostgres::new(Arc::clone(&db_arc)));
    let video_service = Arc::new(VideoService::new(video_repo.clone()));
    let video = VideoUseCases {
        list: video_service.clone(),
        create: video_service.clone(),
        update: video_service.clone(),
        delete: video_service.clone(),
        reorder: video_service,
        refresh_metadata: Arc::new(RefreshVideoMetadataService::new(
            video_repo,
            Arc::clone(&youtube),
        )),
    };

    let post_repo = Arc::new(PostRepositoryPostgres::new(Arc::clone(&db_arc)));
    let post_service = Arc::new(PostService::new(post_repo));
    let post = PostUseCases {
        list_published: post_service.clone(),
        get_published: post_service.clone(),
        list_all: post_service.clone(),
        create: post_service.clone(),
        update: post_service.clone(),
        delete: post_service,
    };

    let functions = FunctionUseCases {
        github_stats: Arc::new(GithubStatsFunctionService::new(github)),
        youtube_data: Arc::new(YoutubeDataFunctionService::new(youtube)),
    };

    let contact_recipient = env::var("CONTACT_RECIPIENT_EMAIL").ok();
    if contact_recipient.is_none() {
        tracing::warn!("CONTACT_RECIPIENT_EMAIL not set; contact form sends will fail");
    }
    let contact = ContactUseCases {
        send: Arc::new(ContactEmailService::new(
            Arc::new(smtp_sender),
            contact_recipient,
        )),
    };

    let storage = StorageUseCases {
        create_upload: Arc::new(UploadService::new(Arc::new(GcsObjectStore::new()))),
    };

    let state = AppState {
        auth,
        profile,
        skill,
        experience,
        project,
        video,
        post,
        functions,
        contact,
        storage,
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&tokens)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::refresh_token_handler);
    // Profile
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_profile::get_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::upsert_profile::upsert_profile_handler);
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::skills::list_skills_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::skills::create_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::skills::update_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::skills::delete_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::featured_skills::list_featured_skills_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::featured_skills::create_featured_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::featured_skills::update_featured_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::featured_skills::delete_featured_skill_handler);
    // Experiences
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::experiences::list_experiences_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::experiences::create_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::experiences::update_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::experiences::delete_experience_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::projects::list_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::projects::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::projects::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::projects::delete_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::projects::refresh_project_stats_handler);
    // Videos; the order route must be registered before the `{id}` routes
    cfg.service(crate::modules::video::adapter::incoming::web::routes::videos::list_videos_handler);
    cfg.service(crate::modules::video::adapter::incoming::web::routes::videos::create_video_handler);
    cfg.service(crate::modules::video::adapter::incoming::web::routes::videos::reorder_videos_handler);
    cfg.service(crate::modules::video::adapter::incoming::web::routes::videos::update_video_handler);
    cfg.service(crate::modules::video::adapter::incoming::web::routes::videos::delete_video_handler);
    cfg.service(crate::modules::video::adapter::incoming::web::routes::videos::refresh_video_metadata_handler);
    // Posts
    cfg.service(crate::modules::post::adapter::incoming::web::routes::posts::list_posts_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::posts::get_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::posts::list_all_posts_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::posts::create_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::posts::update_post_handler);
    cfg.service(crate::modules::post::adapter::incoming::web::routes::posts::delete_post_handler);
    // Functions
    cfg.service(crate::modules::functions::adapter::incoming::web::routes::github_stats::github_stats_handler);
    cfg.service(crate::modules::functions::adapter::incoming::web::routes::youtube_data::youtube_data_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::send_email::send_email_handler);
    // Uploads
    cfg.service(crate::modules::storage::adapter::incoming::web::routes::uploads::create_upload_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
