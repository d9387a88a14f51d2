// Per-handle status table
#![allow(dead_code)]

use crate::interface;

use super::syscalls::fs_constants::*;

//what the library currently believes a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileHandleStatus {
    Unknown,
    IsATty,
    IsAFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenStat {
    pub status: FileHandleStatus,
    //sg_flags of the legacy tty interface
    pub flags: i16,
}

impl Default for OpenStat {
    fn default() -> Self {
        OpenStat { status: FileHandleStatus::Unknown, flags: 0 }
    }
}

/// Status cache for the handles `SMALLEST_VALID_HANDLE..` of one process.
///
/// Each slot has its own lock so updates to different handles never contend,
/// and a read-modify-write on one handle happens under one write guard.
pub struct OpenStatTable {
    slots: Vec<interface::RustLock<OpenStat>>,
}

impl OpenStatTable {
    pub fn new() -> OpenStatTable {
        OpenStatTable { slots: (0..NHANDLES).map(|_| interface::RustLock::new(OpenStat::default())).collect() }
    }

    pub fn slot(&self, fd: i32) -> Option<&interface::RustLock<OpenStat>> {
        self.slots.get(open_index(fd)?)
    }

    //out-of-range handles share the last slot
    pub fn clamped_slot(&self, fd: i32) -> &interface::RustLock<OpenStat> {
        match self.slot(fd) {
            Some(slot) => slot,
            None => &self.slots[NHANDLES - 1],
        }
    }

    pub fn status(&self, fd: i32) -> FileHandleStatus {
        match self.slot(fd) {
            Some(slot) => slot.read().status,
            None => FileHandleStatus::Unknown,
        }
    }

    pub fn set_status(&self, fd: i32, status: FileHandleStatus) {
        if let Some(slot) = self.slot(fd) {
            slot.write().status = status;
        }
    }

    pub fn invalidate(&self, fd: i32) {
        self.set_status(fd, FileHandleStatus::Unknown);
    }

    //dup2 carries the cached state over to the new handle
    pub fn copy(&self, oldfd: i32, newfd: i32) {
        if oldfd == newfd {
            return;
        }
        if let (Some(old), Some(new)) = (self.slot(oldfd), self.slot(newfd)) {
            let copied = *old.read();
            *new.write() = copied;
        }
    }
}

impl Default for OpenStatTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_map_to_slots_from_smallest_valid_handle() {
        let table = OpenStatTable::new();
        assert!(table.slot(SMALLEST_VALID_HANDLE).is_some());
        assert!(table.slot(SMALLEST_VALID_HANDLE - 1).is_none());
        assert!(table.slot(NHANDLES as i32 + SMALLEST_VALID_HANDLE - 1).is_some());
        assert!(table.slot(NHANDLES as i32 + SMALLEST_VALID_HANDLE).is_none());
    }

    #[test]
    fn extreme_handles_have_no_slot() {
        let table = OpenStatTable::new();
        assert!(table.slot(i32::MAX).is_none());
        assert!(table.slot(i32::MAX - 1).is_none());
        assert!(table.slot(i32::MIN).is_none());
        table.clamped_slot(i32::MAX).write().flags = 0x7;
        let last = NHANDLES as i32 + SMALLEST_VALID_HANDLE - 1;
        assert_eq!(table.slot(last).unwrap().read().flags, 0x7);
    }

    #[test]
    fn clamped_slot_falls_back_to_last_slot() {
        let table = OpenStatTable::new();
        table.clamped_slot(1000).write().flags = 0x42;
        assert_eq!(table.clamped_slot(-100).read().flags, 0x42);
        let last = NHANDLES as i32 + SMALLEST_VALID_HANDLE - 1;
        assert_eq!(table.slot(last).unwrap().read().flags, 0x42);
        assert_eq!(table.slot(0).unwrap().read().flags, 0);
    }

    #[test]
    fn invalidate_and_copy() {
        let table = OpenStatTable::new();
        table.set_status(3, FileHandleStatus::IsATty);
        table.set_status(CONTROLLING_TTY, FileHandleStatus::IsAFile);
        table.copy(3, CONTROLLING_TTY);
        assert_eq!(table.status(CONTROLLING_TTY), FileHandleStatus::IsATty);
        table.invalidate(3);
        assert_eq!(table.status(3), FileHandleStatus::Unknown);
        //out of range is a no-op
        table.invalidate(500);
        assert_eq!(table.status(500), FileHandleStatus::Unknown);
    }
}
