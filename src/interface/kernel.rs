//! The native MiNT/TOS calls the library is allowed to reach.
//!
//! ## Kernel Module
//!
//! Every trip into the operating system made by the emulation layer goes
//! through [`MintKernel`]. Keeping the set of entry points this narrow is what
//! lets the emulated calls run against the real kernel, against the host
//! backend in [`HostKernel`](crate::interface::HostKernel), or against a
//! recording double in the tests.
//!
//! Return conventions follow GEMDOS: a negative value is a negated errno, a
//! non-negative value is the call's result.

use crate::interface::types::{ConsoleGeometry, IoctlPtrUnion};

pub trait MintKernel: Send + Sync {
    /// `Fcntl(fd, arg, cmd)`, the native control call for both file-status
    /// commands and device ioctls.
    fn fcntl(&self, fd: i32, arg: IoctlPtrUnion, cmd: u32) -> i32;

    /// Whether the handle refers to a terminal, asked of the kernel itself.
    /// The library keeps its own cache on top of this.
    fn is_terminal(&self, fd: i32) -> bool;

    /// `Fopen(path, mode)`; returns the new handle or a negated errno.
    fn fopen(&self, path: &str, mode: i32) -> i32;

    /// `Fclose(fd)`.
    fn fclose(&self, fd: i32) -> i32;

    /// `Fforce(stdh, nonstdh)`: make `stdh` refer to whatever `nonstdh` does.
    fn fforce(&self, stdh: i32, nonstdh: i32) -> i32;

    /// Line-A text cell and pixel extents (`V_CEL_MX`, `V_CEL_MY`,
    /// `V_X_MAX`, `V_Y_MAX`).
    fn console_geometry(&self) -> ConsoleGeometry;

    /// `Giaccess(data, register)` on the sound chip; register 14 is port A.
    fn giaccess(&self, data: i16, register: i16) -> u8;

    /// `Super(1L)`: true while the caller is still in user mode.
    fn super_inquire(&self) -> bool;

    /// `Super(0L)`: enter supervisor mode, returns the saved stack pointer.
    fn super_enter(&self) -> i32;

    /// `SuperToUser(ssp)`.
    fn super_leave(&self, ssp: i32);

    /// Read a word from I/O space. Only valid in supervisor mode.
    fn peek_mfp(&self, addr: u32) -> u16;

    /// `Ssystem(mode, arg1, 0)`.
    fn ssystem(&self, mode: i16, arg1: u32) -> i32;

    /// Whether the running kernel implements `Ssystem`.
    fn has_ssystem(&self) -> bool;

    /// `Sversion`-style MiNT version, e.g. `0x110` for 1.16. Zero when
    /// running on plain TOS.
    fn mint_version(&self) -> u16;

    /// `Psetpgrp(pid, pgrp)`.
    fn psetpgrp(&self, pid: i32, pgrp: i32) -> i32;
}
