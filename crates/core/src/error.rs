//! Error types for tabulus layout inference.

use thiserror::Error;

/// Primary error type for layout inference operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("type error: expected {expected}, got {got}")]
    InvalidArgumentType {
        expected: &'static str,
        got: &'static str,
    },

    #[error("cannot compute {0} of an empty item set")]
    EmptyInput(&'static str),

    #[error("no unique most common {attribute}: {candidates} values share the top count")]
    NoMode {
        attribute: &'static str,
        candidates: usize,
    },

    #[error("cannot merge positions with {0} dimensions")]
    AmbiguousDimension(usize),

    #[error("invalid table parameters: {0}")]
    InvalidParams(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),

    #[error("page {page}: field names {got:?} do not match {expected:?}")]
    FieldMismatch {
        page: i32,
        expected: Vec<String>,
        got: Vec<String>,
    },

    #[error("page {page}: {source}")]
    Page {
        page: i32,
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    /// Attach a page id to an error raised while processing that page.
    pub fn on_page(self, page: i32) -> Self {
        match self {
            LayoutError::Page { .. } | LayoutError::FieldMismatch { .. } => self,
            other => LayoutError::Page {
                page,
                source: Box::new(other),
            },
        }
    }
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
