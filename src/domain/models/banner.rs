use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file::FileAttachment;
use crate::domain::errors::{MarketError, MarketResult};
use crate::domain::value_objects::RecordId;

/// An image in the banner carousel
pub type BannerImage = FileAttachment;

/// The landing-page banner, a singleton document holding an ordered image
/// list. Order is exactly the stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: RecordId,
    pub images: Vec<BannerImage>,
    pub created_at: DateTime<Utc>,
}

impl Banner {
    pub fn new() -> Self {
        Self {
            id: RecordId::generate(),
            images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append in upload order
    pub fn append_images(&mut self, images: Vec<BannerImage>) {
        self.images.extend(images);
    }

    /// Remove every image whose public URL equals `url`; returns the count
    pub fn remove_images_by_url(&mut self, url: &str) -> usize {
        let before = self.images.len();
        self.images.retain(|image| image.path != url);
        before - self.images.len()
    }

    /// Stable relocation of one image. Both indexes are checked against the
    /// current length before any mutation, so a failed move leaves the list
    /// exactly as it was.
    pub fn move_image(&mut self, old_index: usize, new_index: usize) -> MarketResult<()> {
        let len = self.images.len();
        if old_index >= len || new_index >= len {
            return Err(MarketError::validation(format!(
                "image index out of bounds: {} -> {} with {} images",
                old_index, new_index, len
            )));
        }

        let image = self.images.remove(old_index);
        self.images.insert(new_index, image);
        Ok(())
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}
