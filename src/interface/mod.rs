//! Module definitions for the MiNTPOSIX interface
//!
//! ## Interface Module
//!
//! Narrow interface through which the library reaches the operating system
//! and its support crates. Kernel calls go through the [`MintKernel`] trait
//! only, and locks, globals and maps are re-exported here under stable
//! aliases so the emulated calls never name a support crate directly.

pub mod errnos;
mod host;
mod kernel;
mod misc;
pub mod types;
pub use errnos::*;
pub use host::*;
pub use kernel::*;
pub use misc::*;
pub use types::*;
