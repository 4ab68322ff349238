//! Shell Configuration

use std::path::{Path, PathBuf};

use fos_content::CommandLine;

use crate::common::{shell_switches, shell_user_agent};
use crate::ShellError;

/// Shell configuration options
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Directory of the persistent browser context
    pub data_path: PathBuf,

    /// Directory holding the startup data blobs shared with child processes
    pub startup_data_dir: PathBuf,

    /// Application-private data directory, if the platform has one
    pub app_data_dir: Option<PathBuf>,

    /// User agent string
    pub user_agent: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_path: std::env::temp_dir().join("fos-shell"),
            startup_data_dir: executable_dir(),
            app_data_dir: None,
            user_agent: shell_user_agent(),
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by browser-process switches
    pub fn from_command_line(command_line: &CommandLine) -> Result<Self, ShellError> {
        let mut config = Self::default();

        if let Some(path) = path_switch(command_line, shell_switches::DATA_PATH)? {
            config.data_path = path;
        }
        if let Some(path) = path_switch(command_line, shell_switches::STARTUP_DATA_DIR)? {
            config.startup_data_dir = path;
        }
        if let Some(path) = path_switch(command_line, shell_switches::APP_DATA_DIR)? {
            config.app_data_dir = Some(path);
        }
        if let Some(user_agent) = value_switch(command_line, shell_switches::USER_AGENT)? {
            config.user_agent = user_agent.to_string();
        }

        Ok(config)
    }
}

fn value_switch<'a>(
    command_line: &'a CommandLine,
    switch: &'static str,
) -> Result<Option<&'a str>, ShellError> {
    match command_line.switch_value(switch) {
        Some("") => Err(ShellError::InvalidSwitch { switch }),
        other => Ok(other),
    }
}

fn path_switch(
    command_line: &CommandLine,
    switch: &'static str,
) -> Result<Option<PathBuf>, ShellError> {
    Ok(value_switch(command_line, switch)?.map(PathBuf::from))
}

/// Directory of the running executable, falling back to the working directory
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
