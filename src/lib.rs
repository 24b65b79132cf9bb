pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    Banner,
    ContactInfo,
    DiscoverTag,
    EmploymentRequest,
    FileAttachment,
    FileUpload,
    Friendship,
    // Models
    Job,
    JobFilter,
    // Errors
    MarketError,
    MarketResult,
    MarketStatistics,
    MessageChannel,
    Notification,
    Office,
    PageRequest,
    Pagination,
    Principal,
    ProjectItem,
    // Value objects
    ItemId,
    KeyNamespace,
    RecordId,
    RequestStatus,
    Resume,
    Role,
    StorageError,
    StorageKey,
    Tournament,
    User,
    UserReport,
    ValidationError,
};

// Port types - interfaces for repositories, services and file storage
pub use ports::{
    BannerService,
    DiscoverTagService,
    // Repository ports
    Document,
    DocumentCollection,
    EmployerService,
    // Storage ports
    FileStore,
    // Service ports
    JobService,
    MessagingService,
    NotificationService,
    OfficeService,
    ResumeService,
    StatisticsService,
    TournamentService,
    UserService,
};

// Service implementations - business logic
pub use services::{
    AggregateLocks, BannerServiceImpl, DiscoverTagServiceImpl, EmployerServiceImpl,
    JobServiceImpl, MessagingServiceImpl, NotificationServiceImpl, OfficeServiceImpl,
    ResumeServiceImpl, StatisticsServiceImpl, TournamentServiceImpl, UserServiceImpl,
};

// Application factory and configuration
pub use app::{
    App, AppBuilder, AppConfig, AppError, RepositoryBackend, StorageBackend, create_app_from_env,
    create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::inbound::http::router::{create_router, AppState};
pub use adapters::outbound::persistence::{InMemoryCollection, SqlCollection};
pub use adapters::outbound::storage::ObjectStoreGateway;

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        App, AppBuilder, AppState, DocumentCollection, FileStore, InMemoryCollection, ItemId,
        MarketError, MarketResult, ObjectStoreGateway, PageRequest, Principal, RecordId,
        RepositoryBackend, Role, StorageBackend, create_app_from_env, create_in_memory_app,
        create_router,
    };
}
