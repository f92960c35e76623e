// Console - one mounted content-management console and its panels
use crate::application::banner_editor::BannerEditor;
use crate::application::banner_service::BannerCollection;
use crate::application::error::ConsoleError;
use crate::application::metrics_presenter::MetricsPresenter;
use crate::domain::banner::{Banner, BannerDraft, BannerId};
use crate::domain::content::{BlogPost, ContentLibrary, LegalDocument, SeoEntry};
use crate::domain::metrics::{DashboardMetrics, KpiEntry, StatsObject};
use crate::domain::view::{ViewId, ViewSelector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Data supplied to the console when it is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSeed {
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub seo: Vec<SeoEntry>,
    #[serde(default)]
    pub legal: Vec<LegalDocument>,
    #[serde(default)]
    pub stats: Option<StatsObject>,
}

/// The single panel visible for the active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Panel {
    Analytics {
        metrics: DashboardMetrics,
        kpi: Vec<KpiEntry>,
    },
    Banners {
        banners: Vec<Banner>,
    },
    Blogs {
        posts: Vec<BlogPost>,
        published: usize,
    },
    Seo {
        entries: Vec<SeoEntry>,
    },
    Legal {
        documents: Vec<LegalDocument>,
    },
}

impl Panel {
    pub fn view(&self) -> ViewId {
        match self {
            Panel::Analytics { .. } => ViewId::Analytics,
            Panel::Banners { .. } => ViewId::Banners,
            Panel::Blogs { .. } => ViewId::Blogs,
            Panel::Seo { .. } => ViewId::Seo,
            Panel::Legal { .. } => ViewId::Legal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSnapshot {
    pub active_view: ViewId,
    pub panel: Panel,
}

pub struct Console {
    seed: ConsoleSeed,
    selector: ViewSelector,
    banners: BannerCollection,
    content: ContentLibrary,
    metrics: DashboardMetrics,
    presenter: MetricsPresenter,
    editor: Arc<dyn BannerEditor>,
}

impl Console {
    pub fn mount(
        seed: ConsoleSeed,
        mut presenter: MetricsPresenter,
        editor: Arc<dyn BannerEditor>,
    ) -> Self {
        let metrics = presenter.derive(seed.stats.as_ref());
        let banners = BannerCollection::initialize(seed.banners.clone());
        let content = ContentLibrary::new(
            seed.blog_posts.clone(),
            seed.seo.clone(),
            seed.legal.clone(),
        );

        tracing::info!(
            "Console mounted: {} banners, {} blog posts, {} SEO entries, {} legal documents",
            banners.len(),
            content.blog_posts.len(),
            content.seo.len(),
            content.legal.len()
        );

        Self {
            seed,
            selector: ViewSelector::new(),
            banners,
            content,
            metrics,
            presenter,
            editor,
        }
    }

    /// Drop all runtime state and start over from the mount seed.
    pub fn remount(&mut self) {
        self.selector = ViewSelector::new();
        self.banners = BannerCollection::initialize(self.seed.banners.clone());
        self.metrics = self.presenter.derive(self.seed.stats.as_ref());
        tracing::info!("Console remounted");
    }

    pub fn select_view(&mut self, target: ViewId) {
        tracing::debug!("View {} -> {}", self.current_view(), target);
        self.selector.select_view(target);
    }

    pub fn current_view(&self) -> ViewId {
        self.selector.current_view()
    }

    pub fn list_banners(&self) -> &[Banner] {
        self.banners.list_banners()
    }

    pub fn delete_banner(&mut self, id: BannerId) {
        self.banners.delete_banner(id);
    }

    pub async fn create_banner(&mut self, draft: BannerDraft) -> Result<Banner, ConsoleError> {
        let banner = self.editor.create_banner(draft).await?;
        self.banners.insert(banner.clone())?;
        tracing::info!("Created banner {} ({})", banner.id, banner.title);
        Ok(banner)
    }

    pub async fn update_banner(
        &mut self,
        id: BannerId,
        draft: BannerDraft,
    ) -> Result<Banner, ConsoleError> {
        let current = self
            .banners
            .get(id)
            .cloned()
            .ok_or(ConsoleError::BannerNotFound(id))?;

        let updated = self.editor.update_banner(&current, draft).await?;
        if updated.id != id {
            tracing::warn!("Editor changed banner id {} to {}", id, updated.id);
            return Err(ConsoleError::EditorRejected(format!(
                "banner id changed from {} to {}",
                id, updated.id
            )));
        }

        self.banners.replace(updated.clone())?;
        tracing::info!("Updated banner {} ({})", updated.id, updated.title);
        Ok(updated)
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn render(&self) -> Panel {
        match self.selector.current_view() {
            ViewId::Analytics => Panel::Analytics {
                metrics: self.metrics.clone(),
                kpi: self
                    .seed
                    .stats
                    .as_ref()
                    .map(|s| s.kpi.clone())
                    .unwrap_or_default(),
            },
            ViewId::Banners => Panel::Banners {
                banners: self.banners.list_banners().to_vec(),
            },
            ViewId::Blogs => Panel::Blogs {
                posts: self.content.blog_posts.clone(),
                published: self.content.published_posts(),
            },
            ViewId::Seo => Panel::Seo {
                entries: self.content.seo.clone(),
            },
            ViewId::Legal => Panel::Legal {
                documents: self.content.legal.clone(),
            },
        }
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        let panel = self.render();
        ConsoleSnapshot {
            active_view: panel.view(),
            panel,
        }
    }
}
