// Storage implementations
pub mod object_store_gateway;

// Provider configuration
pub mod s3;

// Re-export key types
pub use object_store_gateway::ObjectStoreGateway;
pub use s3::{create_s3_store, public_base, validate_bucket_name, S3Config};
