mod item_id;
mod record_id;
mod storage_key;

pub use item_id::*;
pub use record_id::*;
pub use storage_key::*;
