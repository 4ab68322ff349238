//! Packed Resources
//!
//! On platforms that ship resources as a pak file inside the application's
//! private data directory, every child gets its own read-only descriptor.
//! Children cannot run without it, so a missing pak aborts the launch.

use std::fs::File;
use std::os::fd::OwnedFd;
use std::path::PathBuf;

use fos_content::{
    CommandLine, ContentError, DescriptorKey, FileDescriptorInfo, CONTENT_DESCRIPTOR_MAX,
};

use super::ChildProcessFiles;

/// Directory under the app data directory holding pak files
pub const PAK_DIRECTORY: &str = "paks";
/// Shell resource pak
pub const SHELL_PAK_FILE: &str = "fos_shell.pak";
/// Slot of the shell pak in a child's descriptor table
pub const SHELL_PAK_DESCRIPTOR: DescriptorKey = DescriptorKey(CONTENT_DESCRIPTOR_MAX + 1);

/// Transfers a fresh pak descriptor to every child launch
#[derive(Debug, Clone)]
pub struct PackedResourceFile {
    app_data_dir: Option<PathBuf>,
}

impl PackedResourceFile {
    pub fn new(app_data_dir: Option<PathBuf>) -> Self {
        Self { app_data_dir }
    }

    /// `<app data dir>/paks/fos_shell.pak`
    pub fn pak_path(&self) -> Result<PathBuf, ContentError> {
        let dir = self
            .app_data_dir
            .as_ref()
            .ok_or(ContentError::PathUnavailable("application data directory"))?;
        Ok(dir.join(PAK_DIRECTORY).join(SHELL_PAK_FILE))
    }
}

impl ChildProcessFiles for PackedResourceFile {
    fn map_files(
        &self,
        _command_line: &CommandLine,
        mappings: &mut FileDescriptorInfo,
    ) -> Result<(), ContentError> {
        let pak_path = self.pak_path()?;
        let pak = File::open(&pak_path).map_err(|source| {
            tracing::error!(
                path = %pak_path.display(),
                error = %source,
                "Failed to open pak for child process"
            );
            ContentError::ResourceUnavailable {
                resource: SHELL_PAK_FILE.to_string(),
                source,
            }
        })?;

        mappings.transfer(SHELL_PAK_DESCRIPTOR, OwnedFd::from(pak));
        Ok(())
    }
}
