pub mod repositories;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use repositories::{Document, DocumentCollection};
pub use services::{
    BannerService, DiscoverTagService, EmployerService, JobService, MessagingService,
    NotificationService, OfficeService, ResumeService, StatisticsService, TournamentService,
    UserService,
};
pub use storage::FileStore;
