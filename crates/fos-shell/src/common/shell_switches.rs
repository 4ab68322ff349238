//! Shell Switches
//!
//! Command-line switches read by the shell's browser process.

/// Directory of the persistent browser context
pub const DATA_PATH: &str = "data-path";

/// Directory holding `startup_natives.bin` and `startup_snapshot.bin`
pub const STARTUP_DATA_DIR: &str = "startup-data-dir";

/// Application-private data directory (packed resources live under `paks/`)
pub const APP_DATA_DIR: &str = "app-data-dir";

/// Override the default user agent
pub const USER_AGENT: &str = "user-agent";

/// Print the launch plan of a child with the given role and exit
pub const DUMP_CHILD_LAUNCH: &str = "dump-child-launch";
