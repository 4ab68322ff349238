//! Browser Main Parts
//!
//! Embedder hooks around the browser process's main message loop.

use std::fmt;

use crate::command_line::CommandLine;
use crate::error::ContentError;

/// Parameters the engine's main function was started with
#[derive(Debug, Clone, Default)]
pub struct MainFunctionParams {
    pub command_line: CommandLine,
}

impl MainFunctionParams {
    pub fn new(command_line: CommandLine) -> Self {
        Self { command_line }
    }
}

/// Browser-process startup and shutdown stages
pub trait BrowserMainParts: Send + Sync + fmt::Debug {
    /// Runs once engine threads exist, before the main loop starts
    fn pre_main_message_loop_run(&self) -> Result<(), ContentError> {
        Ok(())
    }

    /// Runs after the main loop has quit
    fn post_main_message_loop_run(&self) {}
}
