// Misc functions for interface
// Locks, globals, logging, etc.

pub use dashmap::DashMap as RustHashMap;
pub use parking_lot::{Mutex, RwLock as RustLock};
pub use std::sync::atomic::{AtomicI32 as RustAtomicI32, Ordering as RustAtomicOrdering};
pub use std::sync::{Arc as RustRfc, LazyLock as RustLazyGlobal, OnceLock as RustOnceCell};

use std::io::Write;

pub static VERBOSE: RustOnceCell<isize> = RustOnceCell::new();

//last error reported through the C entry points, the errno of this libc
static LAST_ERRNO: RustAtomicI32 = RustAtomicI32::new(0);

pub fn new_hashmap<K: std::cmp::Eq + std::hash::Hash, V>() -> RustHashMap<K, V> {
    RustHashMap::new()
}

// Print text to stderr
pub fn log_to_stderr(s: &str) {
    let _ = writeln!(std::io::stderr(), "{}", s);
}

pub fn verbosity() -> isize {
    *VERBOSE.get().unwrap_or(&0)
}

// Only prints when the library was initialised with a positive verbosity
pub fn log_verbose(s: &str) {
    if verbosity() > 0 {
        log_to_stderr(s);
    }
}

pub fn get_errno() -> i32 {
    LAST_ERRNO.load(RustAtomicOrdering::SeqCst)
}

pub fn set_errno(errno: i32) {
    LAST_ERRNO.store(errno, RustAtomicOrdering::SeqCst);
}

//declares an integer-backed enum together with a checked conversion back from
//its discriminant, so raw kernel return codes can be mapped onto it
#[macro_export]
macro_rules! reversible_enum {
    ($(#[$settings: meta])* $visibility: vis enum $enumname:ident {
        $($valuename: ident = $value: literal,)*
    }) => {
        $(#[$settings])*
        $visibility enum $enumname {
            $($valuename = $value,)*
        }

        impl $enumname {
            $visibility fn from_discriminant(v: i32) -> Result<Self, ()> {
                match v {
                    $($value => Ok($enumname::$valuename),)*
                    _ => Err(()),
                }
            }
        }
    }
}
