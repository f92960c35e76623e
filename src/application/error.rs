// Application errors - failures of console use cases
use crate::domain::banner::BannerId;
use crate::domain::view::UnknownView;

/// Failures reported by a banner editor collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("no banner editor is configured")]
    Unavailable,

    #[error("banner edit rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("banner editing is not available")]
    EditorUnavailable,

    #[error("banner editor rejected the change: {0}")]
    EditorRejected(String),

    #[error("banner {0} already exists")]
    DuplicateBannerId(BannerId),

    #[error("banner {0} not found")]
    BannerNotFound(BannerId),

    #[error(transparent)]
    UnknownView(#[from] UnknownView),

    #[error("console is not running")]
    ConsoleStopped,
}

impl From<EditorError> for ConsoleError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::Unavailable => ConsoleError::EditorUnavailable,
            EditorError::Rejected(reason) => ConsoleError::EditorRejected(reason),
        }
    }
}
