#![allow(dead_code)] //suppress warning for these functions not being used in targets other than the tests


use crate::interface;
use crate::interface::{ConsoleGeometry, Errno, IoctlPtrUnion, MintKernel, Xattr};
use crate::mintlib::process::Process;
use crate::mintlib::syscalls::fs_constants::*;
use crate::mintlib::syscalls::ioctl_constants::*;
use std::collections::{HashMap, HashSet};

pub const ENOSYS: i32 = -(Errno::ENOSYS as i32);
pub const EINVAL: i32 = -(Errno::EINVAL as i32);
pub const ENOTTY: i32 = -(Errno::ENOTTY as i32);
pub const EBADF: i32 = -(Errno::EBADF as i32);
pub const EFAULT: i32 = -(Errno::EFAULT as i32);
pub const EIO: i32 = -(Errno::EIO as i32);
pub const ENOENT: i32 = -(Errno::ENOENT as i32);

//speed the mock serial port runs at, reported when asked with -1
pub const MOCK_BAUD: interface::MintLong = 9600;

/// Kernel double: answers from configurable tables and records every call
/// so the tests can check what the emulation asked for.
pub struct MockKernel {
    pub version: u16,
    pub ssystem_supported: bool,
    //requests the native ioctl answers itself, with their result
    pub native: interface::Mutex<HashMap<u32, i32>>,
    //what the native ioctl answers for anything else
    pub unsupported: interface::Mutex<i32>,
    pub terminals: interface::Mutex<HashSet<i32>>,
    pub flags: interface::Mutex<HashMap<i32, i32>>,
    pub xattrs: interface::Mutex<HashMap<i32, Xattr>>,
    pub ctty_close: interface::Mutex<i32>,
    pub opens: interface::Mutex<HashMap<String, i32>>,
    pub geometry: ConsoleGeometry,
    pub porta: interface::Mutex<u8>,
    pub gpip: interface::Mutex<u16>,
    pub user_mode: bool,
    pub baud_error: interface::Mutex<Option<i32>>,
    pub setfl_error: interface::Mutex<Option<i32>>,

    pub fcntl_calls: interface::Mutex<Vec<(i32, u32)>>,
    pub setfl_values: interface::Mutex<Vec<i32>>,
    pub baud_values: interface::Mutex<Vec<interface::MintLong>>,
    pub isatty_queries: interface::Mutex<Vec<i32>>,
    pub opened: interface::Mutex<Vec<String>>,
    pub closed: interface::Mutex<Vec<i32>>,
    pub forced: interface::Mutex<Vec<(i32, i32)>>,
    pub hardware_calls: interface::Mutex<Vec<&'static str>>,
    pub pgrp_calls: interface::Mutex<Vec<(i32, i32)>>,
}

impl MockKernel {
    pub fn new() -> MockKernel {
        MockKernel {
            version: 0x119,
            ssystem_supported: true,
            native: interface::Mutex::new(HashMap::new()),
            unsupported: interface::Mutex::new(ENOSYS),
            terminals: interface::Mutex::new(HashSet::new()),
            flags: interface::Mutex::new(HashMap::new()),
            xattrs: interface::Mutex::new(HashMap::new()),
            ctty_close: interface::Mutex::new(0),
            opens: interface::Mutex::new(HashMap::new()),
            geometry: ConsoleGeometry { max_cell_x: 79, max_cell_y: 24, x_max: 640, y_max: 400 },
            porta: interface::Mutex::new(0xff),
            gpip: interface::Mutex::new(0xff),
            user_mode: true,
            baud_error: interface::Mutex::new(None),
            setfl_error: interface::Mutex::new(None),
            fcntl_calls: interface::Mutex::new(vec![]),
            setfl_values: interface::Mutex::new(vec![]),
            baud_values: interface::Mutex::new(vec![]),
            isatty_queries: interface::Mutex::new(vec![]),
            opened: interface::Mutex::new(vec![]),
            closed: interface::Mutex::new(vec![]),
            forced: interface::Mutex::new(vec![]),
            hardware_calls: interface::Mutex::new(vec![]),
            pgrp_calls: interface::Mutex::new(vec![]),
        }
    }

    pub fn with_terminal(self, fd: i32) -> MockKernel {
        self.terminals.lock().insert(fd);
        self
    }

    pub fn with_xattr(self, fd: i32, xattr: Xattr) -> MockKernel {
        self.xattrs.lock().insert(fd, xattr);
        self
    }

    pub fn with_flags(self, fd: i32, flags: i32) -> MockKernel {
        self.flags.lock().insert(fd, flags);
        self
    }

    pub fn isatty_count(&self, fd: i32) -> usize {
        self.isatty_queries.lock().iter().filter(|queried| **queried == fd).count()
    }

    pub fn fcntl_count(&self, cmd: u32) -> usize {
        self.fcntl_calls.lock().iter().filter(|(_, called)| *called == cmd).count()
    }
}

impl MintKernel for MockKernel {
    fn fcntl(&self, fd: i32, arg: IoctlPtrUnion, cmd: u32) -> i32 {
        self.fcntl_calls.lock().push((fd, cmd));
        if let Some(ret) = self.native.lock().get(&cmd) {
            return *ret;
        }
        match cmd {
            F_GETFL => *self.flags.lock().get(&fd).unwrap_or(&0),
            F_SETFL => {
                if let Some(err) = *self.setfl_error.lock() {
                    return err;
                }
                let value = arg.as_scalar() as i32;
                self.setfl_values.lock().push(value);
                self.flags.lock().insert(fd, value);
                0
            }
            FSTAT => match self.xattrs.lock().get(&fd) {
                Some(xattr) => {
                    *interface::get_xattrstruct(arg).unwrap() = *xattr;
                    0
                }
                None => EBADF,
            },
            TIOCOBAUD => {
                let baud = interface::get_ioctl_mutlong(arg).unwrap();
                self.baud_values.lock().push(*baud);
                if let Some(err) = *self.baud_error.lock() {
                    return err;
                }
                if *baud < 0 {
                    *baud = MOCK_BAUD;
                }
                0
            }
            _ => *self.unsupported.lock(),
        }
    }

    fn is_terminal(&self, fd: i32) -> bool {
        self.isatty_queries.lock().push(fd);
        self.terminals.lock().contains(&fd)
    }

    fn fopen(&self, path: &str, _mode: i32) -> i32 {
        self.opened.lock().push(path.to_string());
        *self.opens.lock().get(path).unwrap_or(&ENOENT)
    }

    fn fclose(&self, fd: i32) -> i32 {
        self.closed.lock().push(fd);
        if fd == CONTROLLING_TTY {
            return *self.ctty_close.lock();
        }
        0
    }

    fn fforce(&self, stdh: i32, nonstdh: i32) -> i32 {
        self.forced.lock().push((stdh, nonstdh));
        0
    }

    fn console_geometry(&self) -> ConsoleGeometry {
        self.hardware_calls.lock().push("linea");
        self.geometry
    }

    fn giaccess(&self, _data: i16, _register: i16) -> u8 {
        self.hardware_calls.lock().push("giaccess");
        *self.porta.lock()
    }

    fn super_inquire(&self) -> bool {
        self.hardware_calls.lock().push("super_inquire");
        self.user_mode
    }

    fn super_enter(&self) -> i32 {
        self.hardware_calls.lock().push("super_enter");
        0x1234
    }

    fn super_leave(&self, ssp: i32) {
        assert_eq!(ssp, 0x1234);
        self.hardware_calls.lock().push("super_leave");
    }

    fn peek_mfp(&self, _addr: u32) -> u16 {
        self.hardware_calls.lock().push("peek_mfp");
        *self.gpip.lock()
    }

    fn ssystem(&self, _mode: i16, _arg1: u32) -> i32 {
        self.hardware_calls.lock().push("ssystem");
        *self.gpip.lock() as i32
    }

    fn has_ssystem(&self) -> bool {
        self.ssystem_supported
    }

    fn mint_version(&self) -> u16 {
        self.version
    }

    fn psetpgrp(&self, pid: i32, pgrp: i32) -> i32 {
        self.pgrp_calls.lock().push((pid, pgrp));
        0
    }
}

pub fn setup_process(kernel: MockKernel) -> (interface::RustRfc<MockKernel>, Process) {
    let kernel = interface::RustRfc::new(kernel);
    let process = Process::new(1, kernel.clone());
    (kernel, process)
}

pub fn modem1_xattr() -> Xattr {
    Xattr { st_mode: S_IFCHR | 0o666, st_rdev: 257, ..Default::default() }
}
