//! Error types for nexora-core.

use thiserror::Error;

/// Failure while building an [`ArticleStore`](crate::store::ArticleStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read article file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed article data: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("article #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate article id: {0}")]
    DuplicateId(String),

    #[error("article {0} must have a read time of at least one minute")]
    ZeroReadTime(String),
}

/// Rejected view-state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("no article with id {0:?}")]
    UnknownArticle(String),
}

/// A display mode name that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode {0:?} (expected light or dark)")]
pub struct ParseModeError(pub String);
