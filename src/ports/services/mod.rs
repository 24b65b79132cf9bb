mod banner_service;
mod catalog_service;
mod employer_service;
mod engagement_service;
mod job_service;
mod messaging_service;
mod tournament_service;
mod user_service;

pub use banner_service::BannerService;
pub use catalog_service::{DiscoverTagService, OfficeService};
pub use employer_service::EmployerService;
pub use engagement_service::{NotificationService, StatisticsService};
pub use job_service::JobService;
pub use messaging_service::MessagingService;
pub use tournament_service::TournamentService;
pub use user_service::{ResumeService, UserService};
