// File and handle related constants
#![allow(dead_code)]

// Imported into ioctl_calls and the host backend

//GEMDOS handles start below zero: -3..-1 are the character devices, -1 being
//the controlling terminal
pub const SMALLEST_VALID_HANDLE: i32 = -3;
pub const CONTROLLING_TTY: i32 = -1;
//number of slots in the open-status table
pub const NHANDLES: usize = 40;

pub const O_RDONLY: i32 = 0x0;
pub const O_WRONLY: i32 = 0x1;
pub const O_RDWR: i32 = 0x2;
pub const O_ACCMODE: i32 = 0x3;

pub const O_NDELAY: i32 = 0x100;
// O_NONBLOCK=O_NDELAY
pub const O_NONBLOCK: i32 = O_NDELAY;
pub const O_CREAT: i32 = 0x200;
pub const O_TRUNC: i32 = 0x400;
pub const O_EXCL: i32 = 0x800;
pub const O_APPEND: i32 = 0x1000;
pub const O_NOCTTY: i32 = 0x4000;

//Commands for FCNTL
pub const F_DUPFD: u32 = 0;
pub const F_GETFD: u32 = 1;
pub const F_SETFD: u32 = 2;
pub const F_GETFL: u32 = 3;
pub const F_SETFL: u32 = 4;

//File types for FSTAT
pub const S_IFCHR: u32 = 0o20000;
pub const S_IFDIR: u32 = 0o40000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFIFO: u32 = 0o120000;
pub const S_IFMT: u32 = 0o170000;

pub const NULL_DEVICE: &str = "U:\\dev\\null";
//TOS without the unified filesystem only knows the BIOS name
pub const NULL_DEVICE_FALLBACK: &str = "NUL:";

pub fn is_chr(mode: u32) -> bool {
    (mode & S_IFMT) == S_IFCHR
}

pub fn is_reg(mode: u32) -> bool {
    (mode & S_IFMT) == S_IFREG
}

//slot of a handle in the open-status table, None below the smallest handle
//or when the offset does not fit
pub fn open_index(fd: i32) -> Option<usize> {
    let index = fd.checked_sub(SMALLEST_VALID_HANDLE)?;
    usize::try_from(index).ok()
}
