// Console view domain model - which panel is on screen
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five mutually exclusive content-management panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Analytics,
    Banners,
    Blogs,
    Seo,
    Legal,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Analytics,
        ViewId::Banners,
        ViewId::Blogs,
        ViewId::Seo,
        ViewId::Legal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Analytics => "analytics",
            ViewId::Banners => "banners",
            ViewId::Blogs => "blogs",
            ViewId::Seo => "seo",
            ViewId::Legal => "legal",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown console view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Tab state machine: five states, fully connected, starts on Analytics.
#[derive(Debug, Clone, Default)]
pub struct ViewSelector {
    active: ViewId,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_view(&mut self, target: ViewId) {
        self.active = target;
    }

    pub fn current_view(&self) -> ViewId {
        self.active
    }
}
