use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{FileAttachment, FileUpload, Job, MessageChannel};

/// Outbound message construction. Only rendering and attachment storage
/// live here; delivery belongs to downstream systems.
#[async_trait]
pub trait MessagingService: Send + Sync + 'static {
    /// Render the message body for a job post on the given channel
    fn render_job_post(&self, job: &Job, channel: MessageChannel) -> String;

    /// Store an attachment that an outbound message will reference
    async fn upload_attachment(&self, upload: FileUpload) -> MarketResult<FileAttachment>;
}
