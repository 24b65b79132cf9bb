pub mod in_memory_collection;
pub mod sql_collection;

// Re-export key types
pub use in_memory_collection::InMemoryCollection;
pub use sql_collection::SqlCollection;
