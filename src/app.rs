use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::{
    adapters::{
        inbound::http::router::{create_router, AppState},
        outbound::{
            persistence::{InMemoryCollection, SqlCollection},
            storage::{create_s3_store, public_base, ObjectStoreGateway, S3Config},
        },
    },
    domain::models::{
        Banner, DiscoverTag, EmploymentRequest, Friendship, Job, Notification, Office, Tournament,
        User, UserReport,
    },
    ports::{
        repositories::DocumentCollection,
        services::{MessagingService, NotificationService},
        storage::FileStore,
    },
    services::{
        AggregateLocks, BannerServiceImpl, DiscoverTagServiceImpl, EmployerServiceImpl,
        JobServiceImpl, MessagingServiceImpl, NotificationServiceImpl, OfficeServiceImpl,
        ResumeServiceImpl, StatisticsServiceImpl, TournamentServiceImpl, UserServiceImpl,
    },
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub repository: RepositoryBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::InMemory,
            repository: RepositoryBackend::InMemory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory,
    S3 {
        bucket: String,
        region: String,
        access_key: Option<String>,
        secret_key: Option<String>,
    },
    MinIO {
        endpoint: String,
        bucket: String,
        access_key: String,
        secret_key: String,
    },
}

/// Repository backend configuration
#[derive(Debug, Clone)]
pub enum RepositoryBackend {
    InMemory,
    Postgres { connection_string: String },
}

/// The assembled application: one handle per service port
pub struct App {
    pub user_service: Arc<dyn crate::ports::services::UserService>,
    pub resume_service: Arc<dyn crate::ports::services::ResumeService>,
    pub job_service: Arc<dyn crate::ports::services::JobService>,
    pub office_service: Arc<dyn crate::ports::services::OfficeService>,
    pub discover_tag_service: Arc<dyn crate::ports::services::DiscoverTagService>,
    pub banner_service: Arc<dyn crate::ports::services::BannerService>,
    pub tournament_service: Arc<dyn crate::ports::services::TournamentService>,
    pub employer_service: Arc<dyn crate::ports::services::EmployerService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub statistics_service: Arc<dyn crate::ports::services::StatisticsService>,
    pub messaging_service: Arc<dyn MessagingService>,
}

impl App {
    pub fn state(&self) -> AppState {
        AppState {
            user_service: self.user_service.clone(),
            resume_service: self.resume_service.clone(),
            job_service: self.job_service.clone(),
            office_service: self.office_service.clone(),
            discover_tag_service: self.discover_tag_service.clone(),
            banner_service: self.banner_service.clone(),
            tournament_service: self.tournament_service.clone(),
            employer_service: self.employer_service.clone(),
            notification_service: self.notification_service.clone(),
            statistics_service: self.statistics_service.clone(),
            messaging_service: self.messaging_service.clone(),
        }
    }

    /// The HTTP router serving every endpoint
    pub fn router(&self) -> Router {
        create_router(self.state())
    }
}

struct Collections {
    users: Arc<dyn DocumentCollection<User>>,
    jobs: Arc<dyn DocumentCollection<Job>>,
    offices: Arc<dyn DocumentCollection<Office>>,
    discover_tags: Arc<dyn DocumentCollection<DiscoverTag>>,
    banners: Arc<dyn DocumentCollection<Banner>>,
    tournaments: Arc<dyn DocumentCollection<Tournament>>,
    employment_requests: Arc<dyn DocumentCollection<EmploymentRequest>>,
    notifications: Arc<dyn DocumentCollection<Notification>>,
    friendships: Arc<dyn DocumentCollection<Friendship>>,
    user_reports: Arc<dyn DocumentCollection<UserReport>>,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.config.storage = storage;
        self
    }

    pub fn with_repository(mut self, repository: RepositoryBackend) -> Self {
        self.config.repository = repository;
        self
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<App, AppError> {
        let store = self.create_file_store()?;
        let collections = self.create_collections().await?;
        let locks = Arc::new(AggregateLocks::new());

        let notification_service: Arc<dyn NotificationService> = Arc::new(
            NotificationServiceImpl::new(collections.notifications.clone(), locks.clone()),
        );
        let messaging_service: Arc<dyn MessagingService> =
            Arc::new(MessagingServiceImpl::new(store.clone()));

        Ok(App {
            user_service: Arc::new(UserServiceImpl::new(
                collections.users.clone(),
                collections.user_reports.clone(),
                collections.friendships.clone(),
                store.clone(),
                locks.clone(),
            )),
            resume_service: Arc::new(ResumeServiceImpl::new(
                collections.users.clone(),
                store.clone(),
                locks.clone(),
            )),
            job_service: Arc::new(JobServiceImpl::new(
                collections.jobs.clone(),
                messaging_service.clone(),
                locks.clone(),
            )),
            office_service: Arc::new(OfficeServiceImpl::new(
                collections.offices.clone(),
                locks.clone(),
            )),
            discover_tag_service: Arc::new(DiscoverTagServiceImpl::new(
                collections.discover_tags.clone(),
                locks.clone(),
            )),
            banner_service: Arc::new(BannerServiceImpl::new(
                collections.banners.clone(),
                store.clone(),
                locks.clone(),
            )),
            tournament_service: Arc::new(TournamentServiceImpl::new(
                collections.tournaments.clone(),
                collections.users.clone(),
                locks.clone(),
            )),
            employer_service: Arc::new(EmployerServiceImpl::new(
                collections.employment_requests.clone(),
                notification_service.clone(),
                locks,
            )),
            notification_service,
            statistics_service: Arc::new(StatisticsServiceImpl::new(
                collections.users,
                collections.jobs,
                collections.offices,
                collections.discover_tags,
                collections.tournaments,
                collections.employment_requests,
                collections.notifications,
                collections.friendships,
                collections.user_reports,
            )),
            messaging_service,
        })
    }

    fn create_file_store(&self) -> Result<Arc<dyn FileStore>, AppError> {
        match &self.config.storage {
            StorageBackend::InMemory => Ok(Arc::new(ObjectStoreGateway::in_memory())),
            StorageBackend::S3 {
                bucket,
                region,
                access_key,
                secret_key,
            } => {
                let s3_config = S3Config {
                    bucket: bucket.clone(),
                    region: region.clone(),
                    access_key: access_key.clone(),
                    secret_key: secret_key.clone(),
                    endpoint: None,
                };
                let store = create_s3_store(&s3_config).map_err(storage_init)?;
                Ok(Arc::new(ObjectStoreGateway::new(
                    store,
                    public_base(&s3_config),
                )))
            }
            StorageBackend::MinIO {
                endpoint,
                bucket,
                access_key,
                secret_key,
            } => {
                let s3_config = S3Config {
                    bucket: bucket.clone(),
                    // MinIO accepts any region
                    region: "us-east-1".to_string(),
                    access_key: Some(access_key.clone()),
                    secret_key: Some(secret_key.clone()),
                    endpoint: Some(endpoint.clone()),
                };
                let store = create_s3_store(&s3_config).map_err(storage_init)?;
                Ok(Arc::new(ObjectStoreGateway::new(
                    store,
                    public_base(&s3_config),
                )))
            }
        }
    }

    async fn create_collections(&self) -> Result<Collections, AppError> {
        match &self.config.repository {
            RepositoryBackend::InMemory => Ok(Collections {
                users: Arc::new(InMemoryCollection::new()),
                jobs: Arc::new(InMemoryCollection::new()),
                offices: Arc::new(InMemoryCollection::new()),
                discover_tags: Arc::new(InMemoryCollection::new()),
                banners: Arc::new(InMemoryCollection::new()),
                tournaments: Arc::new(InMemoryCollection::new()),
                employment_requests: Arc::new(InMemoryCollection::new()),
                notifications: Arc::new(InMemoryCollection::new()),
                friendships: Arc::new(InMemoryCollection::new()),
                user_reports: Arc::new(InMemoryCollection::new()),
            }),
            RepositoryBackend::Postgres { connection_string } => {
                let pool = PgPoolOptions::new()
                    .max_connections(8)
                    .connect(connection_string)
                    .await
                    .map_err(repository_init)?;

                let users = SqlCollection::<User>::new(pool.clone());
                let jobs = SqlCollection::<Job>::new(pool.clone());
                let offices = SqlCollection::<Office>::new(pool.clone());
                let discover_tags = SqlCollection::<DiscoverTag>::new(pool.clone());
                let banners = SqlCollection::<Banner>::new(pool.clone());
                let tournaments = SqlCollection::<Tournament>::new(pool.clone());
                let employment_requests = SqlCollection::<EmploymentRequest>::new(pool.clone());
                let notifications = SqlCollection::<Notification>::new(pool.clone());
                let friendships = SqlCollection::<Friendship>::new(pool.clone());
                let user_reports = SqlCollection::<UserReport>::new(pool);

                users.migrate().await.map_err(repository_init)?;
                jobs.migrate().await.map_err(repository_init)?;
                offices.migrate().await.map_err(repository_init)?;
                discover_tags.migrate().await.map_err(repository_init)?;
                banners.migrate().await.map_err(repository_init)?;
                tournaments.migrate().await.map_err(repository_init)?;
                employment_requests.migrate().await.map_err(repository_init)?;
                notifications.migrate().await.map_err(repository_init)?;
                friendships.migrate().await.map_err(repository_init)?;
                user_reports.migrate().await.map_err(repository_init)?;

                Ok(Collections {
                    users: Arc::new(users),
                    jobs: Arc::new(jobs),
                    offices: Arc::new(offices),
                    discover_tags: Arc::new(discover_tags),
                    banners: Arc::new(banners),
                    tournaments: Arc::new(tournaments),
                    employment_requests: Arc::new(employment_requests),
                    notifications: Arc::new(notifications),
                    friendships: Arc::new(friendships),
                    user_reports: Arc::new(user_reports),
                })
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn storage_init(error: impl std::fmt::Display) -> AppError {
    AppError::StorageInit {
        message: error.to_string(),
    }
}

fn repository_init(error: impl std::fmt::Display) -> AppError {
    AppError::RepositoryInit {
        message: error.to_string(),
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<App, AppError> {
    AppBuilder::new()
        .with_storage(StorageBackend::InMemory)
        .with_repository(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<App, AppError> {
    let storage = match std::env::var("STORAGE_BACKEND").as_deref() {
        Ok("s3") => {
            let bucket = require_env("S3_BUCKET")?;
            let region = require_env("S3_REGION")?;
            let access_key = std::env::var("S3_ACCESS_KEY").ok();
            let secret_key = std::env::var("S3_SECRET_KEY").ok();

            StorageBackend::S3 {
                bucket,
                region,
                access_key,
                secret_key,
            }
        }
        Ok("minio") => StorageBackend::MinIO {
            endpoint: require_env("MINIO_ENDPOINT")?,
            bucket: require_env("MINIO_BUCKET")?,
            access_key: require_env("MINIO_ACCESS_KEY")?,
            secret_key: require_env("MINIO_SECRET_KEY")?,
        },
        _ => StorageBackend::InMemory,
    };

    let repository = match std::env::var("REPOSITORY_BACKEND").as_deref() {
        Ok("postgres") => RepositoryBackend::Postgres {
            connection_string: require_env("DATABASE_URL")?,
        },
        _ => RepositoryBackend::InMemory,
    };

    AppBuilder::new()
        .with_storage(storage)
        .with_repository(repository)
        .build()
        .await
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::Configuration {
        message: format!("{} environment variable required", name),
    })
}
