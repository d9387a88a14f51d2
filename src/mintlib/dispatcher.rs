#![allow(dead_code)]
#![allow(unused_variables)]

pub const IOCTL_SYSCALL: i32 = 15;
pub const ISATTY_SYSCALL: i32 = 20;
pub const DUP2_SYSCALL: i32 = 25;
pub const SETPGRP_SYSCALL: i32 = 81;
pub const BSD_SETPGRP_SYSCALL: i32 = 82;

//process the C entry points act for
pub const CURRENT_PID: u64 = 1;

use super::process::*;
use crate::interface;
use crate::interface::errnos::*;

//this macro takes in a syscall invocation name (i.e. process.ioctl_syscall), and all of the arguments
//to the syscall. Then it unwraps the arguments, returning the error if any one of them is an error
//value, and returning the value of the function if not. It does this by using the ? operator in
//the body of a closure within the variadic macro
macro_rules! check_and_dispatch {
    ( $process:ident . $func:ident, $($arg:expr),* ) => {
        match (|| -> Result<i32, i32> { Ok($process.$func( $($arg?),* )) })() {
            Ok(i) => i, Err(i) => i
        }
    };
}

// maps the -errno convention of the emulated calls onto the C one: -1 with
// the error left in errno
fn to_c_result(ret: i32) -> i32 {
    if ret < 0 {
        interface::set_errno(-ret);
        return -1;
    }
    ret
}

#[no_mangle]
pub extern "C" fn dispatcher(pid: u64, callnum: i32, arg1: interface::Arg, arg2: interface::Arg, arg3: interface::Arg) -> i32 {
    let process = match processtable_getref(pid) {
        Some(process) => process,
        None => return syscall_error(Errno::ESRCH, "dispatcher", "no such process"),
    };

    match callnum {
        IOCTL_SYSCALL => {
            check_and_dispatch!(process.ioctl_syscall, interface::get_int(arg1), interface::get_uint(arg2), interface::get_ioctlptrunion(arg3))
        }
        ISATTY_SYSCALL => {
            check_and_dispatch!(process.isatty_syscall, interface::get_int(arg1))
        }
        DUP2_SYSCALL => {
            check_and_dispatch!(process.dup2_syscall, interface::get_int(arg1), interface::get_int(arg2))
        }
        SETPGRP_SYSCALL => {
            check_and_dispatch!(process.setpgrp_syscall,)
        }
        BSD_SETPGRP_SYSCALL => {
            check_and_dispatch!(process.bsd_setpgrp_syscall, interface::get_int(arg1), interface::get_int(arg2))
        }

        _ => {//unknown syscall
            syscall_error(Errno::ENOSYS, "dispatcher", "unknown call number")
        }
    }
}

#[no_mangle]
pub extern "C" fn mintioctl(fd: i32, cmd: u32, arg: interface::IoctlPtrUnion) -> i32 {
    match processtable_getref(CURRENT_PID) {
        Some(process) => to_c_result(process.ioctl_syscall(fd, cmd, arg)),
        None => to_c_result(syscall_error(Errno::ESRCH, "ioctl", "library not initialised")),
    }
}

#[no_mangle]
pub extern "C" fn mintsetpgrp() -> i32 {
    match processtable_getref(CURRENT_PID) {
        Some(process) => to_c_result(process.setpgrp_syscall()),
        None => to_c_result(syscall_error(Errno::ESRCH, "setpgrp", "library not initialised")),
    }
}

#[no_mangle]
pub extern "C" fn minterrno() -> i32 {
    interface::get_errno()
}

#[no_mangle]
pub extern "C" fn mintrustinit(verbosity: isize) {
    let _ = interface::VERBOSE.set(verbosity); //assigned to suppress unused result warning

    let kernel: interface::RustRfc<dyn interface::MintKernel> = interface::RustRfc::new(interface::HostKernel::new());
    let process = Process::new(CURRENT_PID, kernel);
    interface::log_verbose(&format!(
        "mintrustinit: MiNT version {:#x}, modem status via {:?}",
        process.mint_version, process.modem_source
    ));
    processtable_insert(CURRENT_PID, process);
}

#[no_mangle]
pub extern "C" fn mintrustfinalize() {
    processtable_clear();
}
