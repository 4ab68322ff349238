//! Browser Context
//!
//! An isolated cookie, storage and network namespace. The engine only ever
//! holds these by reference; embedders own them.

use std::fmt;
use std::path::Path;

/// Browser context as seen by the engine
pub trait BrowserContext: Send + Sync + fmt::Debug {
    /// Off-the-record contexts keep nothing on disk
    fn is_off_the_record(&self) -> bool;

    /// Directory backing this context
    fn path(&self) -> &Path;
}

/// Identity comparison of two context handles.
///
/// Contexts are compared by address: two distinct contexts with equal
/// settings are still different namespaces.
pub fn same_context(a: &dyn BrowserContext, b: &dyn BrowserContext) -> bool {
    std::ptr::addr_eq(a, b)
}
