//! Descriptor Mappings
//!
//! Table of file descriptors handed to a child process at launch. Each entry
//! is keyed by a logical slot the child looks up, independent of the raw
//! descriptor number in the browser process.

use std::fmt;
use std::os::fd::{AsRawFd, OwnedFd, RawFd};

/// Descriptor value registered for a slot whose file could not be opened
pub const INVALID_FD: RawFd = -1;

/// Logical slot a child process uses to find an inherited descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorKey(pub u32);

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// IPC channel to the browser process
pub const IPC_DESCRIPTOR: DescriptorKey = DescriptorKey(0);
/// Startup natives blob
pub const STARTUP_NATIVES_DATA_DESCRIPTOR: DescriptorKey = DescriptorKey(1);
/// Startup snapshot blob
pub const STARTUP_SNAPSHOT_DATA_DESCRIPTOR: DescriptorKey = DescriptorKey(2);
/// Last slot reserved by the engine; embedder slots start above it
pub const CONTENT_DESCRIPTOR_MAX: u32 = 2;

/// A descriptor registered for a child process
#[derive(Debug)]
pub enum MappedDescriptor {
    /// Borrowed from the browser process, which keeps it open across launches
    Shared(RawFd),
    /// Owned by the mapping; closed in the browser once the child is spawned
    Transferred(OwnedFd),
}

impl MappedDescriptor {
    /// Raw descriptor number in the browser process
    pub fn raw_fd(&self) -> RawFd {
        match self {
            Self::Shared(fd) => *fd,
            Self::Transferred(fd) => fd.as_raw_fd(),
        }
    }

    /// Whether ownership moves to the launch
    pub fn is_transferred(&self) -> bool {
        matches!(self, Self::Transferred(_))
    }
}

/// Descriptor mapping table filled in for one child launch
#[derive(Debug, Default)]
pub struct FileDescriptorInfo {
    mappings: Vec<(DescriptorKey, MappedDescriptor)>,
}

impl FileDescriptorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a descriptor the browser process keeps owning.
    ///
    /// [`INVALID_FD`] is accepted so the slot layout stays stable when a
    /// file could not be opened.
    pub fn share(&mut self, key: DescriptorKey, fd: RawFd) {
        self.insert(key, MappedDescriptor::Shared(fd));
    }

    /// Hand ownership of a descriptor to the launch
    pub fn transfer(&mut self, key: DescriptorKey, fd: OwnedFd) {
        self.insert(key, MappedDescriptor::Transferred(fd));
    }

    fn insert(&mut self, key: DescriptorKey, descriptor: MappedDescriptor) {
        if let Some(slot) = self.mappings.iter_mut().find(|(k, _)| *k == key) {
            tracing::warn!(%key, "descriptor slot mapped twice, replacing");
            slot.1 = descriptor;
        } else {
            self.mappings.push((key, descriptor));
        }
    }

    /// Raw descriptor registered for a slot
    pub fn get(&self, key: DescriptorKey) -> Option<RawFd> {
        self.mappings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, d)| d.raw_fd())
    }

    /// Mapping entry for a slot
    pub fn entry(&self, key: DescriptorKey) -> Option<&MappedDescriptor> {
        self.mappings.iter().find(|(k, _)| *k == key).map(|(_, d)| d)
    }

    pub fn contains(&self, key: DescriptorKey) -> bool {
        self.entry(key).is_some()
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (DescriptorKey, &MappedDescriptor)> {
        self.mappings.iter().map(|(k, d)| (*k, d))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_keeps_sentinel() {
        let mut info = FileDescriptorInfo::new();
        info.share(STARTUP_NATIVES_DATA_DESCRIPTOR, INVALID_FD);

        assert_eq!(info.get(STARTUP_NATIVES_DATA_DESCRIPTOR), Some(INVALID_FD));
        assert!(!info.contains(STARTUP_SNAPSHOT_DATA_DESCRIPTOR));
    }

    #[test]
    fn test_transfer_owns_descriptor() {
        let file = tempfile::tempfile().unwrap();
        let raw = file.as_raw_fd();

        let mut info = FileDescriptorInfo::new();
        info.transfer(DescriptorKey(CONTENT_DESCRIPTOR_MAX + 1), OwnedFd::from(file));

        let entry = info.entry(DescriptorKey(CONTENT_DESCRIPTOR_MAX + 1)).unwrap();
        assert!(entry.is_transferred());
        assert_eq!(entry.raw_fd(), raw);
    }

    #[test]
    fn test_remapping_replaces_entry() {
        let mut info = FileDescriptorInfo::new();
        info.share(IPC_DESCRIPTOR, 3);
        info.share(IPC_DESCRIPTOR, 4);

        assert_eq!(info.len(), 1);
        assert_eq!(info.get(IPC_DESCRIPTOR), Some(4));
    }
}
