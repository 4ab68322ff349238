//! Quota Permission
//!
//! Requests from web content for more storage than the default allowance.

use url::Url;

use crate::process::ChildProcessId;

/// Storage class a quota request applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    Temporary,
    Persistent,
    Syncable,
}

/// Parameters of a quota request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageQuotaParams {
    /// Origin asking for quota
    pub origin_url: Url,
    /// Storage class
    pub storage_type: StorageType,
    /// Requested size in bytes
    pub requested_size: u64,
    /// Whether the request came from a user gesture
    pub user_gesture: bool,
}

/// Embedder answer to a quota request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaPermissionResponse {
    Allow,
    Disallow,
    CancelledByUser,
}

/// Receives the answer; may be invoked on any thread
pub type PermissionCallback = Box<dyn FnOnce(QuotaPermissionResponse) + Send>;

/// Decides quota requests. Handed to the engine, which keeps it alive.
pub trait QuotaPermissionContext: Send + Sync {
    fn request_quota_permission(
        &self,
        params: &StorageQuotaParams,
        render_process_id: ChildProcessId,
        callback: PermissionCallback,
    );
}
