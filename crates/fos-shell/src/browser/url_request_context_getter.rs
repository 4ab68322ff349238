//! URL Request Context Getter
//!
//! Network configuration of one shell browser context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fos_content::{
    ProtocolHandler, ProtocolHandlerMap, RequestContextGetter, RequestInterceptor,
    RequestInterceptors,
};

/// Request context description handed to the engine's network process
#[derive(Debug)]
pub struct ShellRequestContextGetter {
    /// Cookie and cache location, `None` for off-the-record contexts
    storage_path: Option<PathBuf>,
    /// User agent sent with requests
    user_agent: String,
    /// Embedder-served schemes
    protocol_handlers: ProtocolHandlerMap,
    /// Interceptors in consultation order
    request_interceptors: RequestInterceptors,
}

impl ShellRequestContextGetter {
    pub fn new(
        storage_path: Option<PathBuf>,
        user_agent: String,
        protocol_handlers: ProtocolHandlerMap,
        request_interceptors: RequestInterceptors,
    ) -> Self {
        Self {
            storage_path,
            user_agent,
            protocol_handlers,
            request_interceptors,
        }
    }

    /// Schemes with a registered handler
    pub fn handled_schemes(&self) -> impl Iterator<Item = &str> {
        self.protocol_handlers.keys().map(String::as_str)
    }
}

impl RequestContextGetter for ShellRequestContextGetter {
    fn storage_path(&self) -> Option<&Path> {
        self.storage_path.as_deref()
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn protocol_handler(&self, scheme: &str) -> Option<&Arc<dyn ProtocolHandler>> {
        self.protocol_handlers.get(scheme)
    }

    fn request_interceptors(&self) -> &[Box<dyn RequestInterceptor>] {
        &self.request_interceptors
    }
}
