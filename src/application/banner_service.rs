// Banner collection - working set of slider banners for one console mount
use crate::application::error::ConsoleError;
use crate::domain::banner::{Banner, BannerId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct BannerCollection {
    banners: Vec<Banner>,
}

impl BannerCollection {
    /// Seed ids are expected to be unique; duplicates are reported, not removed.
    pub fn initialize(seed: Vec<Banner>) -> Self {
        let mut seen = HashSet::new();
        for banner in &seed {
            if !seen.insert(banner.id) {
                tracing::warn!("Seeded banners contain duplicate id {}", banner.id);
            }
        }

        tracing::debug!("Banner collection initialized with {} banners", seed.len());
        Self { banners: seed }
    }

    pub fn list_banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn get(&self, id: BannerId) -> Option<&Banner> {
        self.banners.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    /// Remove a banner, keeping survivors in order. Unknown ids are a no-op.
    pub fn delete_banner(&mut self, id: BannerId) -> Option<Banner> {
        match self.banners.iter().position(|b| b.id == id) {
            Some(index) => {
                let removed = self.banners.remove(index);
                tracing::info!("Deleted banner {} ({})", id, removed.title);
                Some(removed)
            }
            None => {
                tracing::debug!("Delete of unknown banner {} ignored", id);
                None
            }
        }
    }

    pub fn insert(&mut self, banner: Banner) -> Result<(), ConsoleError> {
        if self.get(banner.id).is_some() {
            return Err(ConsoleError::DuplicateBannerId(banner.id));
        }
        self.banners.push(banner);
        Ok(())
    }

    /// Swap in a new version of an existing banner at the same position.
    pub fn replace(&mut self, banner: Banner) -> Result<(), ConsoleError> {
        let slot = self
            .banners
            .iter_mut()
            .find(|b| b.id == banner.id)
            .ok_or(ConsoleError::BannerNotFound(banner.id))?;
        *slot = banner;
        Ok(())
    }
}
