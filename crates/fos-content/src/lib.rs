//! fOS Content API
//!
//! The contract between the fOS engine and the application that embeds it.
//! The engine owns process launching, the main message loop and descriptor
//! transport; the embedder plugs in policy through [`ContentBrowserClient`].
//!
//! # Lifecycle
//! 1. The host constructs its browser client once per process.
//! 2. The engine calls [`ContentBrowserClient::create_browser_main_parts`]
//!    and drives the returned [`BrowserMainParts`].
//! 3. For each browser context the engine asks for a request context.
//! 4. For each child launch the engine asks for extra switches and
//!    descriptor mappings.
//!
//! # Example
//! ```rust,ignore
//! use fos_content::{CommandLine, ContentBrowserClient, MainFunctionParams};
//!
//! let parts = client.create_browser_main_parts(MainFunctionParams::new(CommandLine::from_env()));
//! parts.pre_main_message_loop_run()?;
//! ```

mod browser_client;
mod browser_context;
mod command_line;
mod content_client;
mod content_url;
mod descriptors;
mod error;
mod main_parts;
mod process;
mod quota;
mod request_context;
pub mod switches;

pub use browser_client::ContentBrowserClient;
pub use browser_context::{same_context, BrowserContext};
pub use command_line::CommandLine;
pub use content_client::ContentClient;
pub use content_url::{ContentUrl, BLOB_SCHEME, DATA_SCHEME, FILESYSTEM_SCHEME, FILE_SCHEME};
pub use descriptors::{
    DescriptorKey, FileDescriptorInfo, MappedDescriptor, CONTENT_DESCRIPTOR_MAX, INVALID_FD,
    IPC_DESCRIPTOR, STARTUP_NATIVES_DATA_DESCRIPTOR, STARTUP_SNAPSHOT_DATA_DESCRIPTOR,
};
pub use error::ContentError;
pub use main_parts::{BrowserMainParts, MainFunctionParams};
pub use process::{ChildProcessId, ProcessType};
pub use quota::{
    PermissionCallback, QuotaPermissionContext, QuotaPermissionResponse, StorageQuotaParams,
    StorageType,
};
pub use request_context::{
    ProtocolHandler, ProtocolHandlerMap, RequestContextGetter, RequestInterceptor,
    RequestInterceptors,
};

/// Content API version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
