//! Handle classification and duplication.
//!
//! These calls are implementations on the [`Process`] struct and are what the
//! ioctl emulation uses to decide whether a handle is a terminal and to
//! re-point the controlling terminal.
//!
//! - [isatty_syscall](crate::mintlib::process::Process::isatty_syscall)
//! - [_isatty_helper](crate::mintlib::process::Process::_isatty_helper)
//! - [_isctty_helper](crate::mintlib::process::Process::_isctty_helper)
//! - [dup2_syscall](crate::mintlib::process::Process::dup2_syscall)
//! - [_dup2_helper](crate::mintlib::process::Process::_dup2_helper)

use super::fs_constants::*;
use super::ioctl_constants::*;
use crate::interface;
use crate::mintlib::openstat::FileHandleStatus;
use crate::mintlib::process::Process;

impl Process {
    /// ### Description
    ///
    /// `isatty_syscall()` reports whether `fd` refers to a terminal.
    ///
    /// The answer is cached in the open-status table. A handle whose slot is
    /// `Unknown` (never asked, or reset by the controlling-terminal ioctls)
    /// is classified by the kernel and the result stored. Handles outside
    /// the table are asked of the kernel every time.
    ///
    /// ### Returns
    ///
    /// `1` for a terminal, `0` otherwise.
    pub fn isatty_syscall(&self, fd: i32) -> i32 {
        if self._isatty_helper(fd) {
            1
        } else {
            0
        }
    }

    pub fn _isatty_helper(&self, fd: i32) -> bool {
        let slot = match self.open_stat.slot(fd) {
            Some(slot) => slot,
            None => return self.kernel.is_terminal(fd),
        };

        match slot.read().status {
            FileHandleStatus::IsATty => return true,
            FileHandleStatus::IsAFile => return false,
            FileHandleStatus::Unknown => {}
        }

        let istty = self.kernel.is_terminal(fd);
        slot.write().status = if istty { FileHandleStatus::IsATty } else { FileHandleStatus::IsAFile };
        istty
    }

    // fd is the controlling terminal if it is -1 itself, or if both it and -1
    // are terminals naming the same device
    pub fn _isctty_helper(&self, fd: i32) -> bool {
        if fd == CONTROLLING_TTY {
            return true;
        }
        if !self._isatty_helper(fd) || !self._isatty_helper(CONTROLLING_TTY) {
            return false;
        }

        let mut own = interface::Xattr::default();
        let mut ctty = interface::Xattr::default();
        if self.kernel.fcntl(fd, interface::ioctl_ptr(&mut own), FSTAT) < 0 {
            return false;
        }
        if self.kernel.fcntl(CONTROLLING_TTY, interface::ioctl_ptr(&mut ctty), FSTAT) < 0 {
            return false;
        }
        own.st_dev == ctty.st_dev && own.st_ino == ctty.st_ino
    }

    /// ### Description
    ///
    /// `dup2_syscall()` makes `newfd` refer to what `oldfd` refers to, using
    /// `Fforce`, and carries the cached status of `oldfd` over to `newfd`.
    ///
    /// ### Returns
    ///
    /// `newfd` on success, the negated kernel error otherwise.
    pub fn dup2_syscall(&self, oldfd: i32, newfd: i32) -> i32 {
        match self._dup2_helper(oldfd, newfd) {
            Ok(()) => newfd,
            Err(e) => e,
        }
    }

    //newfd may legitimately be -1, so success and failure are kept apart
    pub fn _dup2_helper(&self, oldfd: i32, newfd: i32) -> Result<(), i32> {
        if oldfd == newfd {
            return Ok(());
        }
        let ret = self.kernel.fforce(newfd, oldfd);
        if ret < 0 {
            return Err(interface::native_error(ret, "dup2"));
        }
        self.open_stat.copy(oldfd, newfd);
        Ok(())
    }
}
