//! Request Context
//!
//! Per-browser-context network configuration. The engine's network process
//! builds its URL request context from what a [`RequestContextGetter`]
//! describes.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use url::Url;

/// Handler for a URL scheme the embedder serves itself
pub trait ProtocolHandler: Send + Sync + fmt::Debug {
    /// Whether a redirect to `url` may be followed into this handler
    fn is_safe_redirect_target(&self, _url: &Url) -> bool {
        true
    }
}

/// Protocol handlers keyed by scheme
pub type ProtocolHandlerMap = HashMap<String, Arc<dyn ProtocolHandler>>;

/// Hook that sees every request before the network stack
pub trait RequestInterceptor: Send + Sync + fmt::Debug {
    /// Whether this interceptor takes over the request
    fn intercepts(&self, url: &Url) -> bool;
}

/// Interceptors in the order they are consulted
pub type RequestInterceptors = Vec<Box<dyn RequestInterceptor>>;

/// Network configuration for one browser context
pub trait RequestContextGetter: Send + Sync + fmt::Debug {
    /// On-disk location for cookies and cache; `None` keeps everything in memory
    fn storage_path(&self) -> Option<&Path>;

    /// User agent sent with requests
    fn user_agent(&self) -> &str;

    /// Handler registered for a scheme
    fn protocol_handler(&self, scheme: &str) -> Option<&Arc<dyn ProtocolHandler>>;

    /// Interceptors in consultation order
    fn request_interceptors(&self) -> &[Box<dyn RequestInterceptor>];

    /// First interceptor claiming a request
    fn find_interceptor(&self, url: &Url) -> Option<&dyn RequestInterceptor> {
        self.request_interceptors()
            .iter()
            .find(|interceptor| interceptor.intercepts(url))
            .map(|interceptor| &**interceptor)
    }
}
