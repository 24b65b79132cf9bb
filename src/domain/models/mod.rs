pub mod banner;
pub mod discover_tag;
pub mod employment;
pub mod file;
pub mod job;
pub mod message;
pub mod notification;
pub mod office;
pub mod page;
pub mod social;
pub mod statistics;
pub mod tournament;
pub mod user;

pub use banner::*;
pub use discover_tag::*;
pub use employment::*;
pub use file::*;
pub use job::*;
pub use message::*;
pub use notification::*;
pub use office::*;
pub use page::*;
pub use social::*;
pub use statistics::*;
pub use tournament::*;
pub use user::*;
