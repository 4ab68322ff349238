//! Content errors

use std::io;

/// Error reported by an embedder to the engine.
///
/// Returned from launch and lifecycle hooks; the engine treats it as an
/// unrecoverable failure of the operation it was performing.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Resource unavailable: {resource}: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: io::Error,
    },

    #[error("Path unavailable: {0}")]
    PathUnavailable(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
