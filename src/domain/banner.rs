// Banner domain model - homepage slider records
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(pub u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    Active,
    #[default]
    Scheduled,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub image_url: String,
    pub status: BannerStatus,
    #[serde(default)]
    pub click_count: u64,
}

impl Banner {
    pub fn new(id: BannerId, title: String, image_url: String, status: BannerStatus) -> Self {
        Self {
            id,
            title,
            image_url,
            status,
            click_count: 0,
        }
    }

    pub fn with_clicks(mut self, click_count: u64) -> Self {
        self.click_count = click_count;
        self
    }
}

/// Editor input for creating or replacing a banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDraft {
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub status: BannerStatus,
}

impl BannerDraft {
    #[cfg(test)]
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        status: BannerStatus,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            status,
        }
    }

    pub fn into_banner(self, id: BannerId, click_count: u64) -> Banner {
        Banner::new(id, self.title, self.image_url, self.status).with_clicks(click_count)
    }
}
