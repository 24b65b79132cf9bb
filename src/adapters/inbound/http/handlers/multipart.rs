use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;

use crate::domain::errors::{MarketError, MarketResult};
use crate::domain::models::FileUpload;

fn malformed(error: MultipartError) -> MarketError {
    MarketError::validation(format!("malformed multipart body: {}", error))
}

/// Pull the first file field out of a multipart body; non-file fields
/// are skipped
pub(crate) async fn read_first_file(multipart: &mut Multipart) -> MarketResult<FileUpload> {
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(malformed)?;

        return Ok(FileUpload {
            filename,
            content_type,
            data,
        });
    }

    Err(MarketError::validation("no file field in the upload"))
}

/// Collect every file field in body order
pub(crate) async fn read_all_files(multipart: &mut Multipart) -> MarketResult<Vec<FileUpload>> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(malformed)?;

        uploads.push(FileUpload {
            filename,
            content_type,
            data,
        });
    }

    Ok(uploads)
}
