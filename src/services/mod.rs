mod aggregate_locks;
mod banner_service_impl;
mod catalog_service_impl;
mod employer_service_impl;
mod engagement_service_impl;
mod file_slots;
mod job_service_impl;
mod messaging_service_impl;
mod resume_service_impl;
mod tournament_service_impl;
mod user_service_impl;

pub use aggregate_locks::AggregateLocks;
pub use banner_service_impl::BannerServiceImpl;
pub use catalog_service_impl::{DiscoverTagServiceImpl, OfficeServiceImpl};
pub use employer_service_impl::EmployerServiceImpl;
pub use engagement_service_impl::{NotificationServiceImpl, StatisticsServiceImpl};
pub use job_service_impl::JobServiceImpl;
pub use messaging_service_impl::MessagingServiceImpl;
pub use resume_service_impl::ResumeServiceImpl;
pub use tournament_service_impl::TournamentServiceImpl;
pub use user_service_impl::UserServiceImpl;
