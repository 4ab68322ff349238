//! Shell Browser Main Parts
//!
//! Owns the primary and off-the-record browser contexts. Both are created
//! together with the main parts, so neither is ever missing while the main
//! parts exist.

use std::fs;

use fos_content::{BrowserContext, BrowserMainParts, ContentError, MainFunctionParams};

use super::ShellBrowserContext;
use crate::ShellConfig;

/// Browser-process startup state of the shell
#[derive(Debug)]
pub struct ShellBrowserMainParts {
    parameters: MainFunctionParams,
    browser_context: ShellBrowserContext,
    off_the_record_browser_context: ShellBrowserContext,
}

impl ShellBrowserMainParts {
    pub fn new(parameters: MainFunctionParams, config: &ShellConfig) -> Self {
        Self {
            parameters,
            browser_context: ShellBrowserContext::new(
                false,
                config.data_path.clone(),
                config.user_agent.clone(),
            ),
            off_the_record_browser_context: ShellBrowserContext::new(
                true,
                config.data_path.clone(),
                config.user_agent.clone(),
            ),
        }
    }

    /// Parameters the engine started with
    pub fn parameters(&self) -> &MainFunctionParams {
        &self.parameters
    }

    /// Persistent context
    pub fn browser_context(&self) -> &ShellBrowserContext {
        &self.browser_context
    }

    /// In-memory context
    pub fn off_the_record_browser_context(&self) -> &ShellBrowserContext {
        &self.off_the_record_browser_context
    }
}

impl BrowserMainParts for ShellBrowserMainParts {
    fn pre_main_message_loop_run(&self) -> Result<(), ContentError> {
        let path = self.browser_context.path();
        fs::create_dir_all(path)?;
        tracing::info!(data_path = %path.display(), "Browser contexts ready");
        Ok(())
    }

    fn post_main_message_loop_run(&self) {
        tracing::info!("Browser main loop finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_content::CommandLine;

    fn config_in(dir: &std::path::Path) -> ShellConfig {
        ShellConfig {
            data_path: dir.join("profile"),
            ..ShellConfig::default()
        }
    }

    #[test]
    fn test_owns_both_contexts() {
        let dir = tempfile::tempdir().unwrap();
        let parts =
            ShellBrowserMainParts::new(MainFunctionParams::default(), &config_in(dir.path()));

        assert!(!parts.browser_context().is_off_the_record());
        assert!(parts.off_the_record_browser_context().is_off_the_record());
        assert!(!fos_content::same_context(
            parts.browser_context(),
            parts.off_the_record_browser_context()
        ));
    }

    #[test]
    fn test_pre_main_message_loop_creates_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let params =
            MainFunctionParams::new(CommandLine::from_args(["fos-shell", "--data-path=x"]));
        let parts = ShellBrowserMainParts::new(params, &config_in(dir.path()));

        parts.pre_main_message_loop_run().unwrap();

        assert!(dir.path().join("profile").is_dir());
        assert_eq!(parts.parameters().command_line.switch_value("data-path"), Some("x"));
    }

    #[test]
    fn test_pre_main_message_loop_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("profile");
        fs::write(&blocker, b"not a directory").unwrap();

        let parts =
            ShellBrowserMainParts::new(MainFunctionParams::default(), &config_in(dir.path()));

        assert!(matches!(parts.pre_main_message_loop_run(), Err(ContentError::Io(_))));
    }
}
