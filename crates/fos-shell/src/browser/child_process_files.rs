//! Child Process Files
//!
//! Files the browser process hands to every child it launches. Which
//! providers exist is a build decision; the client only iterates them.

use std::fmt;

use fos_content::{CommandLine, ContentError, FileDescriptorInfo};

use crate::ShellConfig;

/// Source of descriptors (and matching switches) for child launches
pub trait ChildProcessFiles: Send + Sync + fmt::Debug {
    /// Add the switches that tell a child how its files arrive
    fn append_switches(&self, _command_line: &mut CommandLine) {}

    /// Register this provider's descriptors for one launch
    fn map_files(
        &self,
        command_line: &CommandLine,
        mappings: &mut FileDescriptorInfo,
    ) -> Result<(), ContentError>;
}

/// Providers enabled for this build
#[allow(unused_mut, unused_variables)]
pub fn platform_child_process_files(config: &ShellConfig) -> Vec<Box<dyn ChildProcessFiles>> {
    let mut files: Vec<Box<dyn ChildProcessFiles>> = Vec::new();

    #[cfg(feature = "external-startup-data")]
    files.push(Box::new(super::StartupDataFiles::new(
        super::FileStartupDataOpener::new(&config.startup_data_dir),
    )));

    #[cfg(feature = "packed-resources")]
    files.push(Box::new(super::PackedResourceFile::new(config.app_data_dir.clone())));

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_files_follow_features() {
        let files = platform_child_process_files(&ShellConfig::default());
        let expected = usize::from(cfg!(feature = "external-startup-data"))
            + usize::from(cfg!(feature = "packed-resources"));
        assert_eq!(files.len(), expected);
    }
}
