use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{BannerImage, FileUpload, Principal};

/// The landing-page banner carousel. The banner is a singleton document
/// created on first append; writes are admin-only.
#[async_trait]
pub trait BannerService: Send + Sync + 'static {
    /// Store the uploads under the banner namespace and append them in
    /// upload order; returns the full list after the append
    async fn append_images(
        &self,
        principal: &Principal,
        uploads: Vec<FileUpload>,
    ) -> MarketResult<Vec<BannerImage>>;

    /// Current image list in stored order
    async fn list_images(&self) -> MarketResult<Vec<BannerImage>>;

    /// Remove every image whose public URL matches; best-effort storage
    /// delete of the derived key. Returns how many entries went.
    async fn remove_image(&self, principal: &Principal, url: &str) -> MarketResult<usize>;

    /// Bounds-checked stable relocation; returns the list after the move
    async fn move_image(
        &self,
        principal: &Principal,
        old_index: usize,
        new_index: usize,
    ) -> MarketResult<Vec<BannerImage>>;
}
