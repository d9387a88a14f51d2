#![allow(unused_imports)]
#![allow(clippy::needless_return, clippy::explicit_auto_deref, clippy::redundant_field_names)]

// interface and mintlib are public because otherwise there isn't a great
// way to 'use' them for benchmarking.
pub mod interface;
pub mod mintlib;
#[cfg(test)]
mod tests;
