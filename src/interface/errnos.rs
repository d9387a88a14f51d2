// Error numbers and the error-return helper shared by every emulated call

use crate::interface;

crate::reversible_enum! {
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    #[repr(i32)]
    pub enum Errno {
        EPERM = 1, // Operation not permitted
        ENOENT = 2, // No such file or directory
        ESRCH = 3, // No such process
        EINTR = 4, // Interrupted system call
        EIO = 5, // I/O error
        ENXIO = 6, // No such device or address
        EBADF = 9, // Bad file number
        EAGAIN = 11, // Try again
        ENOMEM = 12, // Out of memory
        EACCES = 13, // Permission denied
        EFAULT = 14, // Bad address
        EBUSY = 16, // Device or resource busy
        ENODEV = 19, // No such device
        EINVAL = 22, // Invalid argument
        ENFILE = 23, // File table overflow
        EMFILE = 24, // Too many open files
        ENOTTY = 25, // Not a typewriter
        ESPIPE = 29, // Illegal seek
        ERANGE = 34, // Math result not representable
        ENOSYS = 38, // Function not implemented
    }
}

/// Returns the negated errno the emulated calls report on failure. When the
/// library runs verbose, the failing call and reason are written to stderr.
pub fn syscall_error(e: Errno, syscall: &str, message: &str) -> i32 {
    if interface::verbosity() > 0 {
        let msg = format!("Error in syscall: {} - {:?}: {}", syscall, e, message);
        interface::log_to_stderr(&msg);
    }
    -(e as i32)
}

// Passes a negative native result through untouched. Codes outside of Errno
// are still surfaced, only the log line differs.
pub fn native_error(ret: i32, syscall: &str) -> i32 {
    if interface::verbosity() > 0 {
        let code = ret.wrapping_neg();
        let msg = match Errno::from_discriminant(code) {
            Ok(e) => format!("Error in syscall: {} - {:?}: native call failed", syscall, e),
            Err(()) => format!("Error in syscall: {} - errno {}: native call failed", syscall, code),
        };
        interface::log_to_stderr(&msg);
    }
    ret
}
