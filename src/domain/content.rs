// Read-only content shown on the Blogs, SEO and Legal panels
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub published_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoEntry {
    pub page: String,
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    pub slug: String,
    pub title: String,
    pub last_updated: NaiveDate,
}

/// Everything the Blogs, SEO and Legal panels display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentLibrary {
    pub blog_posts: Vec<BlogPost>,
    pub seo: Vec<SeoEntry>,
    pub legal: Vec<LegalDocument>,
}

impl ContentLibrary {
    pub fn new(blog_posts: Vec<BlogPost>, seo: Vec<SeoEntry>, legal: Vec<LegalDocument>) -> Self {
        Self {
            blog_posts,
            seo,
            legal,
        }
    }

    pub fn published_posts(&self) -> usize {
        self.blog_posts
            .iter()
            .filter(|p| p.status == PublishStatus::Published)
            .count()
    }
}
