//! Content Client
//!
//! Embedder values shared by every process type.

/// Process-independent embedder hooks
pub trait ContentClient: Send + Sync {
    /// Default user agent string
    fn user_agent(&self) -> String;
}
