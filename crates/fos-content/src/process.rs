//! Process Types
//!
//! Identity and role of child processes launched by the engine.

use std::fmt;

use crate::command_line::CommandLine;
use crate::switches;

/// Engine-assigned identifier of a child process host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildProcessId(pub i32);

impl ChildProcessId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier as handed out by the engine
    pub fn as_raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ChildProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Child({})", self.0)
    }
}

/// Role a process plays, as declared by its `--type` switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessType {
    /// Main browser process (no `--type` switch)
    Browser,
    /// Renderer process (DOM, layout, JS)
    Renderer,
    /// Pre-fork helper that spawns renderers
    Zygote,
    /// GPU process (compositing, WebGL)
    Gpu,
    /// Network process (all I/O)
    Network,
    /// Storage process (IndexedDB, cache)
    Storage,
    /// Short-lived utility process
    Utility,
}

impl ProcessType {
    /// Parse from a `--type` switch value
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            switches::RENDERER_PROCESS => Some(Self::Renderer),
            switches::ZYGOTE_PROCESS => Some(Self::Zygote),
            switches::GPU_PROCESS => Some(Self::Gpu),
            switches::NETWORK_PROCESS => Some(Self::Network),
            switches::STORAGE_PROCESS => Some(Self::Storage),
            switches::UTILITY_PROCESS => Some(Self::Utility),
            _ => None,
        }
    }

    /// Value for the `--type` switch; the browser process has none
    pub fn as_arg(&self) -> Option<&'static str> {
        match self {
            Self::Browser => None,
            Self::Renderer => Some(switches::RENDERER_PROCESS),
            Self::Zygote => Some(switches::ZYGOTE_PROCESS),
            Self::Gpu => Some(switches::GPU_PROCESS),
            Self::Network => Some(switches::NETWORK_PROCESS),
            Self::Storage => Some(switches::STORAGE_PROCESS),
            Self::Utility => Some(switches::UTILITY_PROCESS),
        }
    }

    /// Role declared by a command line.
    ///
    /// Returns `None` for an unrecognised `--type` value; a missing switch
    /// means the browser process.
    pub fn of(command_line: &CommandLine) -> Option<Self> {
        match command_line.switch_value(switches::PROCESS_TYPE) {
            Some(value) => Self::from_arg(value),
            None => Some(Self::Browser),
        }
    }

    /// Whether this is the pre-fork helper role
    pub fn is_zygote(&self) -> bool {
        matches!(self, Self::Zygote)
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_arg().unwrap_or("browser"))
    }
}
