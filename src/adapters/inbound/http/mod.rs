pub mod dto;
pub mod handlers;
pub mod principal;
pub mod router;

pub use dto::*;
pub use handlers::*;
pub use principal::*;
pub use router::*;
