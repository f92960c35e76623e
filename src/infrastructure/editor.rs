// Banner editor adapters
use crate::application::banner_editor::BannerEditor;
use crate::application::error::EditorError;
use crate::domain::banner::{Banner, BannerDraft, BannerId};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Used when no editor service is wired in; every edit is refused.
#[derive(Debug, Clone, Default)]
pub struct DisabledEditor;

#[async_trait]
impl BannerEditor for DisabledEditor {
    async fn create_banner(&self, _draft: BannerDraft) -> Result<Banner, EditorError> {
        Err(EditorError::Unavailable)
    }

    async fn update_banner(
        &self,
        _current: &Banner,
        _draft: BannerDraft,
    ) -> Result<Banner, EditorError> {
        Err(EditorError::Unavailable)
    }
}

/// In-process editor: validates drafts and hands out ids after the highest seeded one.
#[derive(Debug)]
pub struct LocalBannerEditor {
    next_id: AtomicU64,
}

impl LocalBannerEditor {
    pub fn new(existing: &[Banner]) -> Self {
        let next_id = existing.iter().map(|b| b.id.0).max().map_or(1, |max| max + 1);
        Self {
            next_id: AtomicU64::new(next_id),
        }
    }

    fn validate(draft: &BannerDraft) -> Result<(), EditorError> {
        if draft.title.trim().is_empty() {
            return Err(EditorError::Rejected("title must not be empty".to_string()));
        }
        if draft.image_url.trim().is_empty() {
            return Err(EditorError::Rejected("imageUrl must not be empty".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BannerEditor for LocalBannerEditor {
    async fn create_banner(&self, draft: BannerDraft) -> Result<Banner, EditorError> {
        Self::validate(&draft)?;
        let id = BannerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        Ok(draft.into_banner(id, 0))
    }

    async fn update_banner(
        &self,
        current: &Banner,
        draft: BannerDraft,
    ) -> Result<Banner, EditorError> {
        Self::validate(&draft)?;
        Ok(draft.into_banner(current.id, current.click_count))
    }
}
