//! Shell Browser Context

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use fos_content::{BrowserContext, ProtocolHandlerMap, RequestInterceptors};

use super::ShellRequestContextGetter;

/// One of the shell's two browser contexts
#[derive(Debug)]
pub struct ShellBrowserContext {
    /// Keeps nothing on disk
    off_the_record: bool,
    /// Profile directory
    path: PathBuf,
    /// User agent for the request context
    user_agent: String,
    /// Created on the engine's first request
    request_context_getter: OnceLock<Arc<ShellRequestContextGetter>>,
}

impl ShellBrowserContext {
    pub fn new(off_the_record: bool, path: PathBuf, user_agent: String) -> Self {
        Self {
            off_the_record,
            path,
            user_agent,
            request_context_getter: OnceLock::new(),
        }
    }

    /// Create the request context for this browser context.
    ///
    /// The engine asks once per context; a repeated request returns the
    /// getter built first and drops the new handlers.
    pub fn create_request_context(
        &self,
        protocol_handlers: ProtocolHandlerMap,
        request_interceptors: RequestInterceptors,
    ) -> Arc<ShellRequestContextGetter> {
        let mut created = false;
        let getter = self.request_context_getter.get_or_init(|| {
            created = true;
            let storage_path = (!self.off_the_record).then(|| self.path.clone());
            Arc::new(ShellRequestContextGetter::new(
                storage_path,
                self.user_agent.clone(),
                protocol_handlers,
                request_interceptors,
            ))
        });

        if created {
            tracing::debug!(off_the_record = self.off_the_record, "Created request context");
        } else {
            tracing::warn!(off_the_record = self.off_the_record, "Request context already created");
        }

        Arc::clone(getter)
    }

    /// Request context, if the engine asked for one
    pub fn request_context_getter(&self) -> Option<&Arc<ShellRequestContextGetter>> {
        self.request_context_getter.get()
    }
}

impl BrowserContext for ShellBrowserContext {
    fn is_off_the_record(&self) -> bool {
        self.off_the_record
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
