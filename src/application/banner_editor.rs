// Banner editor trait - external collaborator behind "Add Slide" and "Edit"
use crate::application::error::EditorError;
use crate::domain::banner::{Banner, BannerDraft};
use async_trait::async_trait;

#[async_trait]
pub trait BannerEditor: Send + Sync {
    /// Turn a draft into a new banner, assigning its id.
    async fn create_banner(&self, draft: BannerDraft) -> Result<Banner, EditorError>;

    /// Produce the replacement for `current`. The returned banner must keep `current.id`.
    async fn update_banner(
        &self,
        current: &Banner,
        draft: BannerDraft,
    ) -> Result<Banner, EditorError>;
}
