//! This module holds the C-library side of MiNTPOSIX: the per-process state
//! and the calls that emulate what the MiNT kernel cannot do.
//!
//! ## top-level features:
//!
//! - ### Dispatcher:
//!     - The dispatcher receives numbered calls, looks the process up in the
//!       process table and invokes the method corresponding to the call
//!       number. C entry points (`mintioctl`, `mintsetpgrp`) act for the
//!       current process and report failures through errno.
//!
//! - ### Process Objects:
//!     - Each process owns its kernel handle, the emulated line-discipline
//!       state shared by all of its descriptors, the open-status table and
//!       the capabilities resolved when it was created.
//!
//! - ### Open-Status Table:
//!     - One slot per handle from -3 upwards, caching whether a handle is a
//!       terminal and holding the legacy `sg_flags`. Each slot has its own
//!       lock.
//!
//! - ### System Calls:
//!     - `ioctl` with its emulation table, `isatty`, `dup2`, and the two
//!       `setpgrp` flavours, implemented under `syscalls`.

pub mod dispatcher;
pub mod openstat;
pub mod process;
pub mod syscalls;
