pub mod banner_handlers;
pub mod catalog_handlers;
pub mod employer_handlers;
pub mod engagement_handlers;
pub mod job_handlers;
pub mod message_handlers;
mod multipart;
pub mod resume_handlers;
pub mod tournament_handlers;
pub mod user_handlers;

pub use banner_handlers::*;
pub use catalog_handlers::*;
pub use employer_handlers::*;
pub use engagement_handlers::*;
pub use job_handlers::*;
pub use message_handlers::*;
pub use resume_handlers::*;
pub use tournament_handlers::*;
pub use user_handlers::*;
