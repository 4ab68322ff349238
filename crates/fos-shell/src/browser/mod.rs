//! Browser Process
//!
//! The shell's implementation of the engine's browser-process hooks.
//! - Content browser client: the process-wide policy object
//! - Main parts: owns the primary and off-the-record browser contexts
//! - Child process files: descriptors shared with launched children
//! - Quota permission: blanket storage quota policy

mod browser_context;
mod browser_main_parts;
mod child_process_files;
mod content_browser_client;
mod packed_resources;
mod quota_permission_context;
mod startup_data;
mod url_request_context_getter;

pub use browser_context::*;
pub use browser_main_parts::*;
pub use child_process_files::*;
pub use content_browser_client::*;
pub use packed_resources::*;
pub use quota_permission_context::*;
pub use startup_data::*;
pub use url_request_context_getter::*;
