//! S3-compatible storage configuration.
//!
//! Builds an `object_store` backend for AWS S3 or any S3-compatible
//! endpoint (MinIO), and derives the public URL base objects are
//! served from.

use anyhow::{Context, Result};
use object_store::aws::AmazonS3Builder;
use object_store::ObjectStore as ApacheObjectStore;
use std::sync::Arc;

use crate::domain::errors::ValidationError;

/// Configuration for an S3-compatible backend
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Custom endpoint for S3-compatible stores such as MinIO
    pub endpoint: Option<String>,
}

/// Validate a bucket name against the S3 naming rules
pub fn validate_bucket_name(name: &str) -> Result<(), ValidationError> {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 63;

    if name.len() < MIN_LENGTH {
        return Err(ValidationError::BucketNameTooShort {
            actual: name.len(),
            min: MIN_LENGTH,
        });
    }

    if name.len() > MAX_LENGTH {
        return Err(ValidationError::BucketNameTooLong {
            actual: name.len(),
            max: MAX_LENGTH,
        });
    }

    let first = name.chars().next().unwrap_or('-');
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return Err(ValidationError::BucketNameInvalidStart);
    }

    let last = name.chars().last().unwrap_or('-');
    if !last.is_ascii_lowercase() && !last.is_ascii_digit() {
        return Err(ValidationError::BucketNameInvalidEnd);
    }

    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '-' && *c != '.')
    {
        return Err(ValidationError::BucketNameInvalidCharacter(c));
    }

    Ok(())
}

/// Create an S3-compatible store from configuration
pub fn create_s3_store(config: &S3Config) -> Result<Arc<dyn ApacheObjectStore>> {
    validate_bucket_name(&config.bucket)
        .with_context(|| format!("Invalid bucket name '{}'", config.bucket))?;

    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(&config.bucket)
        .with_region(&config.region);

    if let Some(access_key) = &config.access_key {
        builder = builder.with_access_key_id(access_key);
    }

    if let Some(secret_key) = &config.secret_key {
        builder = builder.with_secret_access_key(secret_key);
    }

    if let Some(endpoint) = &config.endpoint {
        builder = builder.with_endpoint(endpoint);
        // MinIO in development typically runs without TLS
        if endpoint.starts_with("http://") {
            builder = builder.with_allow_http(true);
        }
    }

    let store = builder
        .build()
        .with_context(|| format!("Failed to create S3 store for bucket '{}'", config.bucket))?;

    Ok(Arc::new(store))
}

/// Public URL base for objects in the configured bucket.
///
/// Custom endpoints serve objects path-style (`{endpoint}/{bucket}`),
/// AWS serves them virtual-hosted (`https://{bucket}.s3.{region}.amazonaws.com`).
pub fn public_base(config: &S3Config) -> String {
    match &config.endpoint {
        Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), config.bucket),
        None => format!(
            "https://{}.s3.{}.amazonaws.com",
            config.bucket, config.region
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>) -> S3Config {
        S3Config {
            bucket: "job-market-files".to_string(),
            region: "eu-north-1".to_string(),
            access_key: Some("test-access".to_string()),
            secret_key: Some("test-secret".to_string()),
            endpoint: endpoint.map(String::from),
        }
    }

    #[test]
    fn test_valid_bucket_names() {
        assert!(validate_bucket_name("job-market-files").is_ok());
        assert!(validate_bucket_name("abc").is_ok());
        assert!(validate_bucket_name("my.bucket.2024").is_ok());
    }

    #[test]
    fn test_invalid_bucket_names() {
        assert!(matches!(
            validate_bucket_name("ab"),
            Err(ValidationError::BucketNameTooShort { .. })
        ));
        assert!(matches!(
            validate_bucket_name("-bucket"),
            Err(ValidationError::BucketNameInvalidStart)
        ));
        assert!(matches!(
            validate_bucket_name("bucket-"),
            Err(ValidationError::BucketNameInvalidEnd)
        ));
        assert!(matches!(
            validate_bucket_name("My-Bucket"),
            Err(ValidationError::BucketNameInvalidCharacter('M'))
        ));
    }

    #[test]
    fn test_create_store_with_custom_endpoint() {
        let store = create_s3_store(&config(Some("http://localhost:9000")));
        assert!(store.is_ok());
    }

    #[test]
    fn test_create_store_rejects_bad_bucket() {
        let mut bad = config(None);
        bad.bucket = "UPPER".to_string();
        assert!(create_s3_store(&bad).is_err());
    }

    #[test]
    fn test_public_base_aws_and_endpoint() {
        assert_eq!(
            public_base(&config(None)),
            "https://job-market-files.s3.eu-north-1.amazonaws.com"
        );
        assert_eq!(
            public_base(&config(Some("http://localhost:9000/"))),
            "http://localhost:9000/job-market-files"
        );
    }
}
