//! fOS Shell
//!
//! Embeds the fOS engine in-process and answers the policy questions the
//! engine asks the browser process: which URL schemes stay internal, what
//! quota to grant, which switches and descriptors child processes get.
//!
//! # Features
//!
//! - `external-startup-data` (default): share the startup natives/snapshot
//!   blobs with child processes by descriptor
//! - `packed-resources`: transfer `paks/fos_shell.pak` to every child
//!   (Android builds)
//! - `mimalloc`: mimalloc as the binary's global allocator
//!
//! # Example
//! ```rust,ignore
//! use fos_shell::{ShellConfig, ShellContentBrowserClient};
//!
//! let client = ShellContentBrowserClient::new(ShellConfig::default());
//! // hand `client` to the engine; it calls back into the ContentBrowserClient hooks
//! ```

pub mod browser;
pub mod common;
mod config;
mod error;

pub use browser::{
    platform_child_process_files, ChildProcessFiles, FileStartupDataOpener, PackedResourceFile,
    ShellBrowserContext, ShellBrowserMainParts, ShellContentBrowserClient,
    ShellQuotaPermissionContext, ShellRequestContextGetter, StartupDataFds, StartupDataFiles,
    StartupDataOpener, SHELL_PAK_DESCRIPTOR,
};
pub use common::{shell_user_agent, ShellContentClient};
pub use config::ShellConfig;
pub use error::ShellError;

// Re-export the content API the shell implements
pub use fos_content as content;

/// Shell version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
