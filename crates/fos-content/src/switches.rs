//! Content Switches
//!
//! Command-line switches understood by the engine and its child processes.

/// Role of a child process, e.g. `--type=renderer`. Absent in the browser process.
pub const PROCESS_TYPE: &str = "type";

/// Renderer process role
pub const RENDERER_PROCESS: &str = "renderer";

/// Pre-fork helper role. Children forked from the zygote inherit its descriptors.
pub const ZYGOTE_PROCESS: &str = "zygote";

/// GPU process role
pub const GPU_PROCESS: &str = "gpu-process";

/// Network service role
pub const NETWORK_PROCESS: &str = "network";

/// Storage service role
pub const STORAGE_PROCESS: &str = "storage";

/// Generic utility role
pub const UTILITY_PROCESS: &str = "utility";

/// The child receives the startup natives blob as a pre-opened descriptor
/// instead of opening the file itself.
pub const STARTUP_NATIVES_PASSED_BY_FD: &str = "startup-natives-passed-by-fd";

/// The child receives the startup snapshot blob as a pre-opened descriptor
/// instead of opening the file itself.
pub const STARTUP_SNAPSHOT_PASSED_BY_FD: &str = "startup-snapshot-passed-by-fd";
