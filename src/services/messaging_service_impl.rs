use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::MarketResult,
        models::{render_job_message, FileAttachment, FileUpload, Job, MessageChannel},
        value_objects::KeyNamespace,
    },
    ports::{services::MessagingService, storage::FileStore},
};

use super::file_slots;

/// Implementation of MessagingService. Rendering is pure formatting;
/// attachments are stored under the message-upload namespace.
#[derive(Clone)]
pub struct MessagingServiceImpl {
    store: Arc<dyn FileStore>,
}

impl MessagingServiceImpl {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MessagingService for MessagingServiceImpl {
    fn render_job_post(&self, job: &Job, channel: MessageChannel) -> String {
        render_job_message(job, channel)
    }

    async fn upload_attachment(&self, upload: FileUpload) -> MarketResult<FileAttachment> {
        file_slots::store_upload(&*self.store, KeyNamespace::MessageUpload, upload).await
    }
}
