//! Startup Data
//!
//! The JS engine's startup natives and snapshot blobs. The browser process
//! opens them once and shares the same two descriptors with every child, so
//! children never open the files themselves.

use std::fmt;
use std::fs::File;
use std::io;
use std::os::fd::{AsRawFd, OwnedFd, RawFd};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use fos_content::{
    switches, CommandLine, ContentError, FileDescriptorInfo, ProcessType, INVALID_FD,
    STARTUP_NATIVES_DATA_DESCRIPTOR, STARTUP_SNAPSHOT_DATA_DESCRIPTOR,
};

use super::ChildProcessFiles;

/// File name of the startup natives blob
pub const STARTUP_NATIVES_FILE: &str = "startup_natives.bin";
/// File name of the startup snapshot blob
pub const STARTUP_SNAPSHOT_FILE: &str = "startup_snapshot.bin";

/// Opened startup data descriptors
#[derive(Debug)]
pub struct StartupDataFds {
    pub natives: OwnedFd,
    pub snapshot: OwnedFd,
}

/// Opens the startup data for child processes
pub trait StartupDataOpener: Send + Sync + fmt::Debug {
    /// Open both blobs; either both succeed or neither is kept
    fn open(&self) -> io::Result<StartupDataFds>;
}

/// Opens the blobs read-only from a directory
#[derive(Debug, Clone)]
pub struct FileStartupDataOpener {
    natives_path: PathBuf,
    snapshot_path: PathBuf,
}

impl FileStartupDataOpener {
    pub fn new(dir: &Path) -> Self {
        Self {
            natives_path: dir.join(STARTUP_NATIVES_FILE),
            snapshot_path: dir.join(STARTUP_SNAPSHOT_FILE),
        }
    }
}

impl StartupDataOpener for FileStartupDataOpener {
    fn open(&self) -> io::Result<StartupDataFds> {
        let natives = File::open(&self.natives_path)?;
        let snapshot = File::open(&self.snapshot_path)?;
        Ok(StartupDataFds {
            natives: natives.into(),
            snapshot: snapshot.into(),
        })
    }
}

/// Cached descriptor pair. Moves from `Unopened` to `Opened` once, never back.
#[derive(Debug, Default)]
enum CachedStartupData {
    #[default]
    Unopened,
    Opened(StartupDataFds),
}

impl CachedStartupData {
    fn raw_fds(&self) -> (RawFd, RawFd) {
        match self {
            Self::Unopened => (INVALID_FD, INVALID_FD),
            Self::Opened(fds) => (fds.natives.as_raw_fd(), fds.snapshot.as_raw_fd()),
        }
    }
}

/// Shares the startup data descriptors with every child launch
#[derive(Debug)]
pub struct StartupDataFiles<O> {
    opener: O,
    cache: Mutex<CachedStartupData>,
}

impl<O: StartupDataOpener> StartupDataFiles<O> {
    pub fn new(opener: O) -> Self {
        Self {
            opener,
            cache: Mutex::new(CachedStartupData::Unopened),
        }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Whether the descriptors have been opened
    pub fn is_opened(&self) -> bool {
        matches!(*self.lock(), CachedStartupData::Opened(_))
    }

    /// Cached raw descriptors, opening them first if still unopened.
    ///
    /// A failed open leaves the cache unopened and yields [`INVALID_FD`]
    /// for both slots; children then load the data themselves.
    pub fn raw_fds(&self) -> (RawFd, RawFd) {
        let mut cache = self.lock();

        if let CachedStartupData::Unopened = *cache {
            match self.opener.open() {
                Ok(fds) => {
                    tracing::debug!(
                        natives = fds.natives.as_raw_fd(),
                        snapshot = fds.snapshot.as_raw_fd(),
                        "Opened startup data for child processes"
                    );
                    *cache = CachedStartupData::Opened(fds);
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "Startup data unavailable, children will load it themselves"
                    );
                }
            }
        }

        cache.raw_fds()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CachedStartupData> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O: StartupDataOpener> ChildProcessFiles for StartupDataFiles<O> {
    fn append_switches(&self, command_line: &mut CommandLine) {
        // Zygote children inherit the zygote's descriptors
        if ProcessType::of(command_line).is_some_and(|pt| pt.is_zygote()) {
            return;
        }
        command_line.append_switch(switches::STARTUP_NATIVES_PASSED_BY_FD);
        command_line.append_switch(switches::STARTUP_SNAPSHOT_PASSED_BY_FD);
    }

    fn map_files(
        &self,
        _command_line: &CommandLine,
        mappings: &mut FileDescriptorInfo,
    ) -> Result<(), ContentError> {
        let (natives, snapshot) = self.raw_fds();
        mappings.share(STARTUP_NATIVES_DATA_DESCRIPTOR, natives);
        mappings.share(STARTUP_SNAPSHOT_DATA_DESCRIPTOR, snapshot);
        Ok(())
    }
}
