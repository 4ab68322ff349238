//! Browser Client
//!
//! Policy hooks the engine calls in the browser process. Every method has a
//! conservative default so embedders override only what they need.

use std::sync::Arc;

use crate::browser_context::BrowserContext;
use crate::command_line::CommandLine;
use crate::content_url::ContentUrl;
use crate::descriptors::FileDescriptorInfo;
use crate::error::ContentError;
use crate::main_parts::{BrowserMainParts, MainFunctionParams};
use crate::process::ChildProcessId;
use crate::quota::QuotaPermissionContext;
use crate::request_context::{ProtocolHandlerMap, RequestContextGetter, RequestInterceptors};

/// Browser-process embedder interface
pub trait ContentBrowserClient: Send + Sync {
    /// Create the main parts driving browser startup. Called once.
    fn create_browser_main_parts(
        &self,
        parameters: MainFunctionParams,
    ) -> Arc<dyn BrowserMainParts>;

    /// Create the network configuration for a browser context
    fn create_request_context(
        &self,
        browser_context: &dyn BrowserContext,
        protocol_handlers: ProtocolHandlerMap,
        request_interceptors: RequestInterceptors,
    ) -> Arc<dyn RequestContextGetter>;

    /// Whether the embedder handles `url` without the network stack
    fn is_handled_url(&self, _url: &ContentUrl) -> bool {
        false
    }

    /// Add switches to a child process command line before launch
    fn append_extra_command_line_switches(
        &self,
        _command_line: &mut CommandLine,
        _child_process_id: ChildProcessId,
    ) {
    }

    /// File name for downloads that provide none
    fn default_download_name(&self) -> String {
        String::new()
    }

    /// Register descriptors a child process inherits at launch.
    ///
    /// An error aborts the launch.
    fn get_additional_mapped_files_for_child_process(
        &self,
        _command_line: &CommandLine,
        _child_process_id: ChildProcessId,
        _mappings: &mut FileDescriptorInfo,
    ) -> Result<(), ContentError> {
        Ok(())
    }

    /// Policy object for storage quota requests
    fn create_quota_permission_context(&self) -> Option<Arc<dyn QuotaPermissionContext>> {
        None
    }
}
