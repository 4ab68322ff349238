//! Quota Permission Context
//!
//! The shell never grants extra storage quota.

use fos_content::{
    ChildProcessId, PermissionCallback, QuotaPermissionContext, QuotaPermissionResponse,
    StorageQuotaParams,
};

/// Denies every quota request
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellQuotaPermissionContext;

impl ShellQuotaPermissionContext {
    pub fn new() -> Self {
        Self
    }
}

impl QuotaPermissionContext for ShellQuotaPermissionContext {
    fn request_quota_permission(
        &self,
        params: &StorageQuotaParams,
        render_process_id: ChildProcessId,
        callback: PermissionCallback,
    ) {
        tracing::debug!(
            origin = %params.origin_url,
            requested_size = params.requested_size,
            %render_process_id,
            "Denying quota request"
        );
        callback(QuotaPermissionResponse::Disallow);
    }
}
