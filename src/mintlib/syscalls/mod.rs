//! This module holds the emulated calls, implemented as methods on the
//! [`Process`](crate::mintlib::process::Process) struct, and the constants
//! they share. Each call returns a non-negative result or a negated value
//! from the `Errno` enum.

pub mod fs_calls;
pub mod fs_constants;
pub mod ioctl_calls;
pub mod ioctl_constants;
pub mod sys_calls;
pub mod sys_constants;
pub use fs_calls::*;
pub use fs_constants::*;
pub use ioctl_calls::*;
pub use ioctl_constants::*;
pub use sys_calls::*;
pub use sys_constants::*;
