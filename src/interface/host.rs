// Host backend for the kernel interface
//
// Runs the library on a POSIX host: file-status commands and FSTAT are
// translated onto the host's fcntl/fstat, handle management onto
// open/close/dup2. The ST hardware does not exist here, so every modem line
// reads as inactive.

use std::ffi::CString;
use std::mem;

use crate::interface::kernel::MintKernel;
use crate::interface::types::{get_winsizestruct, get_xattrstruct, ConsoleGeometry, IoctlPtrUnion, WinSize};
use crate::mintlib::syscalls::fs_constants::*;
use crate::mintlib::syscalls::ioctl_constants::*;
use crate::mintlib::syscalls::sys_constants::*;

extern crate libc;

fn host_errno() -> i32 {
    -std::io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO)
}

//MiNT status flags -> host status flags
fn flags_to_host(flags: i32) -> i32 {
    let mut hostflags = 0;
    if flags & O_NDELAY != 0 {
        hostflags |= libc::O_NONBLOCK;
    }
    if flags & O_APPEND != 0 {
        hostflags |= libc::O_APPEND;
    }
    hostflags
}

//host status flags -> MiNT status flags, access mode bits are shared
fn flags_from_host(hostflags: i32) -> i32 {
    let mut flags = hostflags & libc::O_ACCMODE;
    if hostflags & libc::O_NONBLOCK != 0 {
        flags |= O_NDELAY;
    }
    if hostflags & libc::O_APPEND != 0 {
        flags |= O_APPEND;
    }
    flags
}

fn host_path(path: &str) -> &str {
    match path {
        NULL_DEVICE | NULL_DEVICE_FALLBACK => "/dev/null",
        other => other,
    }
}

#[derive(Debug, Default)]
pub struct HostKernel;

impl HostKernel {
    pub fn new() -> HostKernel {
        HostKernel
    }

    fn fstat(&self, fd: i32, arg: IoctlPtrUnion) -> i32 {
        let xattr = match get_xattrstruct(arg) {
            Ok(xattr) => xattr,
            Err(e) => return e,
        };
        let mut statbuf: libc::stat = unsafe { mem::zeroed() };
        if unsafe { libc::fstat(fd, &mut statbuf) } < 0 {
            return host_errno();
        }
        xattr.st_mode = statbuf.st_mode as u32;
        xattr.st_ino = statbuf.st_ino as u64;
        xattr.st_dev = statbuf.st_dev as u64;
        xattr.st_rdev = statbuf.st_rdev as u64;
        xattr.st_nlink = statbuf.st_nlink as u32;
        xattr.st_uid = statbuf.st_uid;
        xattr.st_gid = statbuf.st_gid;
        xattr.st_size = statbuf.st_size as i64;
        xattr.st_blksize = statbuf.st_blksize as i64;
        xattr.st_blocks = statbuf.st_blocks as i64;
        xattr.st_mtime = statbuf.st_mtime as i64;
        xattr.st_atime = statbuf.st_atime as i64;
        xattr.st_ctime = statbuf.st_ctime as i64;
        0
    }

    fn winsize(&self, fd: i32) -> Option<WinSize> {
        let mut ws: libc::winsize = unsafe { mem::zeroed() };
        if unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) } < 0 {
            return None;
        }
        Some(WinSize {
            ws_row: ws.ws_row as i16,
            ws_col: ws.ws_col as i16,
            ws_xpixel: ws.ws_xpixel as i16,
            ws_ypixel: ws.ws_ypixel as i16,
        })
    }
}

impl MintKernel for HostKernel {
    fn fcntl(&self, fd: i32, arg: IoctlPtrUnion, cmd: u32) -> i32 {
        match cmd {
            F_GETFL => {
                let ret = unsafe { libc::fcntl(fd, libc::F_GETFL) };
                if ret < 0 {
                    return host_errno();
                }
                flags_from_host(ret)
            }
            F_SETFL => {
                let ret = unsafe { libc::fcntl(fd, libc::F_SETFL, flags_to_host(arg.as_scalar() as i32)) };
                if ret < 0 {
                    return host_errno();
                }
                0
            }
            FSTAT => self.fstat(fd, arg),
            TIOCGWINSZ => {
                let out = match get_winsizestruct(arg) {
                    Ok(out) => out,
                    Err(e) => return e,
                };
                match self.winsize(fd) {
                    Some(ws) => {
                        *out = ws;
                        0
                    }
                    None => host_errno(),
                }
            }
            //everything else is left to the emulation layer
            _ => -libc::ENOSYS,
        }
    }

    fn is_terminal(&self, fd: i32) -> bool {
        fd >= 0 && unsafe { libc::isatty(fd) } == 1
    }

    fn fopen(&self, path: &str, mode: i32) -> i32 {
        let cpath = match CString::new(host_path(path)) {
            Ok(cpath) => cpath,
            Err(_) => return -libc::EINVAL,
        };
        let fd = unsafe { libc::open(cpath.as_ptr(), mode & O_ACCMODE) };
        if fd < 0 {
            return host_errno();
        }
        fd
    }

    fn fclose(&self, fd: i32) -> i32 {
        if unsafe { libc::close(fd) } < 0 {
            return host_errno();
        }
        0
    }

    fn fforce(&self, stdh: i32, nonstdh: i32) -> i32 {
        if unsafe { libc::dup2(nonstdh, stdh) } < 0 {
            return host_errno();
        }
        0
    }

    fn console_geometry(&self) -> ConsoleGeometry {
        let ws = self.winsize(libc::STDOUT_FILENO).unwrap_or(WinSize {
            ws_row: DEFAULT_CONSOLE_ROWS,
            ws_col: DEFAULT_CONSOLE_COLS,
            ws_xpixel: DEFAULT_CONSOLE_XPIXEL,
            ws_ypixel: DEFAULT_CONSOLE_YPIXEL,
        });
        ConsoleGeometry {
            max_cell_x: ws.ws_col - 1,
            max_cell_y: ws.ws_row - 1,
            x_max: ws.ws_xpixel,
            y_max: ws.ws_ypixel,
        }
    }

    //all modem lines are active low, report them released
    fn giaccess(&self, _data: i16, _register: i16) -> u8 {
        0xff
    }

    fn super_inquire(&self) -> bool {
        false
    }

    fn super_enter(&self) -> i32 {
        0
    }

    fn super_leave(&self, _ssp: i32) {}

    fn peek_mfp(&self, _addr: u32) -> u16 {
        0xffff
    }

    fn ssystem(&self, _mode: i16, _arg1: u32) -> i32 {
        -libc::ENOSYS
    }

    fn has_ssystem(&self) -> bool {
        false
    }

    fn mint_version(&self) -> u16 {
        HOST_MINT_VERSION
    }

    fn psetpgrp(&self, pid: i32, pgrp: i32) -> i32 {
        if unsafe { libc::setpgid(pid, pgrp) } < 0 {
            return host_errno();
        }
        0
    }
}
