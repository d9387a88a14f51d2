//! This module contains the device-control call and its emulation.
//!
//! ## Notes:
//!
//! - The call is implemented on the [`Process`] struct. The kernel is always
//!   asked first; only when it answers `ENOSYS` or `EINVAL` does the library
//!   fake the request from the state it keeps itself.
//!
//! - [ioctl_syscall](crate::mintlib::process::Process::ioctl_syscall)
//! - [_ioctl_emulate](crate::mintlib::process::Process::_ioctl_emulate)
//! - [_tiocnotty_helper](crate::mintlib::process::Process::_tiocnotty_helper)
//! - [_tiocsctty_helper](crate::mintlib::process::Process::_tiocsctty_helper)
//! - [_dtr_helper](crate::mintlib::process::Process::_dtr_helper)
//! - [_tiocmget_helper](crate::mintlib::process::Process::_tiocmget_helper)
//! - [_fionbio_helper](crate::mintlib::process::Process::_fionbio_helper)

use super::fs_constants::*;
use super::ioctl_constants::*;
use super::sys_constants::*;
use crate::interface;
use crate::interface::{syscall_error, Errno, IoctlPtrUnion};
use crate::mintlib::process::Process;

//unwraps an argument accessor, returning its error from the enclosing call
macro_rules! get_onearg {
    ($arg: expr) => {
        match (move || -> Result<_, i32> { Ok($arg?) })() {
            Ok(okval) => okval,
            Err(e) => return e,
        }
    };
}

impl Process {
    /// ### Description
    ///
    /// The `ioctl_syscall()` manipulates the underlying device parameters of
    /// special files, terminals in particular.
    ///
    /// The request is handed to the kernel's `Fcntl` first. A non-negative
    /// answer is returned as is. A failure other than `ENOSYS` or `EINVAL`
    /// is returned unchanged. Those two mean the kernel does not know the
    /// request, and it is then emulated, see [`Process::_ioctl_emulate`].
    ///
    /// `TIOCSCTTY` is never passed to a MiNT older than 1.16, whose
    /// implementation is broken; it goes straight to the emulation.
    ///
    /// ### Arguments
    ///
    /// * `fd` - the handle to operate on.
    /// * `request` - the control function, one of the `TIOC*`/`FIO*` codes.
    /// * `ptrunion` - the argument. A plain value or a pointer to the
    ///   structure the request works on, owned by the caller.
    ///
    /// ### Returns
    ///
    /// A non-negative, request dependent value on success, the negated errno
    /// otherwise.
    ///
    /// ### Errors
    ///
    /// * `ENOSYS` - the request is neither known to the kernel nor emulated
    ///   for this kind of handle
    /// * `ENOTTY` - `TIOCSWINSZ` on a handle that is not a terminal
    /// * `EBADF` - `TIOCNOTTY` on a handle that is not the controlling
    ///   terminal
    /// * `EINVAL` - `TIOCMGET` on anything but the built-in serial port
    /// * `EFAULT` - the argument pointer is null
    /// * any kernel error other than `ENOSYS`/`EINVAL`, unchanged
    pub fn ioctl_syscall(&self, fd: i32, request: u32, ptrunion: IoctlPtrUnion) -> i32 {
        //first try the kernel
        let ret = if request == TIOCSCTTY && self.has_broken_sctty() {
            -(Errno::ENOSYS as i32)
        } else {
            self.kernel.fcntl(fd, ptrunion, request)
        };

        if ret >= 0 {
            return ret;
        }
        if ret != -(Errno::ENOSYS as i32) && ret != -(Errno::EINVAL as i32) {
            return interface::native_error(ret, "ioctl");
        }

        self._ioctl_emulate(fd, request, ptrunion)
    }

    /// Software fallback for the requests the kernel rejected.
    ///
    /// Most requests are only faked for terminals; for any other handle they
    /// end up in the final `ENOSYS`. `TIOCSWINSZ` is the odd one out: it
    /// refuses non-terminals with `ENOTTY` while `TIOCGWINSZ` on the same
    /// handle just falls through.
    pub fn _ioctl_emulate(&self, fd: i32, request: u32, ptrunion: IoctlPtrUnion) -> i32 {
        let istty = self._isatty_helper(fd);

        match request {
            TIOCGETD if istty => {
                let out = get_onearg!(interface::get_ioctl_mutlong(ptrunion));
                *out = self.line_discipline.read().ttydisc;
                0
            }
            TIOCSETD if istty => {
                let ttydisc = get_onearg!(interface::get_ioctl_long(ptrunion));
                self.line_discipline.write().ttydisc = ttydisc;
                0
            }
            TIOCLGET if istty => {
                let out = get_onearg!(interface::get_ioctl_mutlong(ptrunion));
                *out = self.line_discipline.read().ldisc;
                0
            }
            TIOCLSET if istty => {
                let ldisc = get_onearg!(interface::get_ioctl_long(ptrunion));
                self.line_discipline.write().ldisc = ldisc;
                0
            }
            TIOCLBIS if istty => {
                let bits = get_onearg!(interface::get_ioctl_long(ptrunion));
                self.line_discipline.write().ldisc |= bits;
                0
            }
            TIOCLBIC if istty => {
                let bits = get_onearg!(interface::get_ioctl_long(ptrunion));
                self.line_discipline.write().ldisc &= !bits;
                0
            }
            TIOCSWINSZ if !istty => {
                syscall_error(
                    Errno::ENOTTY,
                    "ioctl",
                    "TIOCSWINSZ on a handle that is not a terminal",
                )
            }
            TIOCGWINSZ if istty => {
                let win = get_onearg!(interface::get_winsizestruct(ptrunion));
                let geometry = self.kernel.console_geometry();
                win.ws_row = geometry.max_cell_y.saturating_add(1);
                win.ws_col = geometry.max_cell_x.saturating_add(1);
                win.ws_xpixel = geometry.x_max;
                win.ws_ypixel = geometry.y_max;
                0
            }
            TIOCNOTTY if istty => self._tiocnotty_helper(fd),
            TIOCSCTTY if istty => self._tiocsctty_helper(fd),
            TIOCSETP if istty => {
                let sg = get_onearg!(interface::get_sgttybstruct(ptrunion));
                self.open_stat.clamped_slot(fd).write().flags = sg.sg_flags;
                0
            }
            TIOCGETP if istty => {
                let sg = get_onearg!(interface::get_sgttybstruct(ptrunion));
                sg.sg_flags = self.open_stat.clamped_slot(fd).read().flags;
                sg.sg_ispeed = B9600;
                sg.sg_ospeed = B9600;
                sg.sg_erase = DEFAULT_ERASE;
                sg.sg_kill = DEFAULT_KILL;
                0
            }
            TIOCGETC if istty => {
                let out = get_onearg!(interface::get_tcharsstruct(ptrunion));
                *out = self.line_discipline.read().tchars;
                0
            }
            TIOCSETC if istty => {
                let tchars = *get_onearg!(interface::get_tcharsstruct(ptrunion));
                self.line_discipline.write().tchars = tchars;
                0
            }
            TIOCGLTC if istty => {
                let out = get_onearg!(interface::get_ltcharsstruct(ptrunion));
                *out = self.line_discipline.read().ltchars;
                0
            }
            TIOCSLTC if istty => {
                let ltchars = *get_onearg!(interface::get_ltcharsstruct(ptrunion));
                self.line_discipline.write().ltchars = ltchars;
                0
            }
            //there are no process groups to speak of
            TIOCGPGRP if istty => {
                let out = get_onearg!(interface::get_ioctl_mutlong(ptrunion));
                *out = 0;
                0
            }
            TIOCSPGRP if istty => 0,
            TIOCCDTR => self._dtr_helper(fd, false),
            TIOCSDTR => self._dtr_helper(fd, true),
            TIOCMGET => self._tiocmget_helper(fd, ptrunion),
            FIONBIO => self._fionbio_helper(fd, ptrunion),
            _ => syscall_error(Errno::ENOSYS, "ioctl", "request not implemented for this handle"),
        }
    }

    /// Detach from the controlling terminal.
    ///
    /// The cached classification of `fd` and of `-1` is dropped first. If
    /// the kernel will not close `-1`, the controlling terminal (and `fd`,
    /// when it is a different handle) is pointed at the null device instead.
    pub fn _tiocnotty_helper(&self, fd: i32) -> i32 {
        self.open_stat.invalidate(CONTROLLING_TTY);
        self.open_stat.invalidate(fd);

        if fd < 0 || !self._isctty_helper(fd) {
            return syscall_error(
                Errno::EBADF,
                "ioctl",
                "TIOCNOTTY on a handle that is not the controlling terminal",
            );
        }

        if self.kernel.fclose(CONTROLLING_TTY) >= 0 {
            return 0;
        }

        let mut null_fd = self.kernel.fopen(NULL_DEVICE, O_RDWR);
        if null_fd < 0 {
            null_fd = self.kernel.fopen(NULL_DEVICE_FALLBACK, O_RDWR);
        }
        //without a null device the terminal stays attached, detaching still succeeds
        if null_fd < 0 {
            interface::log_verbose("ioctl: TIOCNOTTY could not open a null device");
            return 0;
        }

        //failures past this point leave nothing to undo
        let _ = self.kernel.fforce(CONTROLLING_TTY, null_fd);
        if null_fd != fd {
            let _ = self.kernel.fforce(fd, null_fd);
            let _ = self.kernel.fclose(null_fd);
        }
        0
    }

    /// Make `fd` the controlling terminal by forcing it onto `-1`.
    pub fn _tiocsctty_helper(&self, fd: i32) -> i32 {
        self.open_stat.invalidate(CONTROLLING_TTY);
        self.open_stat.invalidate(fd);

        match self._dup2_helper(fd, CONTROLLING_TTY) {
            Ok(()) => 0,
            Err(e) => e,
        }
    }

    // Dropping DTR is a zero output speed. Raising it again means reading the
    // current speed (-1 asks without changing) and setting that back.
    pub fn _dtr_helper(&self, fd: i32, raise: bool) -> i32 {
        let mut baud: interface::MintLong = if raise { -1 } else { 0 };
        let calls = if raise { 2 } else { 1 };

        for _ in 0..calls {
            let ret = self.kernel.fcntl(fd, interface::ioctl_ptr(&mut baud), TIOCOBAUD);
            if ret < 0 {
                return interface::native_error(ret, "ioctl");
            }
        }
        0
    }

    /// Modem line status of the built-in serial port.
    ///
    /// DSR is not wired on the ST and always reported. RTS and DTR come from
    /// the sound chip's port A, carrier, CTS and ring from the MFP. All the
    /// hardware lines are active low.
    pub fn _tiocmget_helper(&self, fd: i32, ptrunion: IoctlPtrUnion) -> i32 {
        let mut sb = interface::Xattr::default();
        let ret = self.kernel.fcntl(fd, interface::ioctl_ptr(&mut sb), FSTAT);
        if ret < 0 {
            return interface::native_error(ret, "ioctl");
        }
        if !(is_chr(sb.st_mode) && sb.st_rdev == MODEM1_RDEV) {
            return syscall_error(
                Errno::EINVAL,
                "ioctl",
                "TIOCMGET is only supported on the modem1 port",
            );
        }

        let msig = get_onearg!(interface::get_ioctl_mutlong(ptrunion));
        let mut signals = TIOCM_DSR;

        let porta = self.kernel.giaccess(0, PSG_PORT_A);
        if porta & PSG_RTS_BIT == 0 {
            signals |= TIOCM_RTS;
        }
        if porta & PSG_DTR_BIT == 0 {
            signals |= TIOCM_DTR;
        }

        let gpip = self.modem_source.read_gpip(&*self.kernel);
        if gpip & MFP_DCD_BIT == 0 {
            signals |= TIOCM_CAR;
        }
        if gpip & MFP_CTS_BIT == 0 {
            signals |= TIOCM_CTS;
        }
        if gpip & MFP_RI_BIT == 0 {
            signals |= TIOCM_RNG;
        }

        *msig = signals;
        0
    }

    /// Toggle non-blocking I/O through the handle's status flags.
    pub fn _fionbio_helper(&self, fd: i32, ptrunion: IoctlPtrUnion) -> i32 {
        let flags = self.kernel.fcntl(fd, IoctlPtrUnion::null(), F_GETFL);
        if flags < 0 {
            return interface::native_error(flags, "ioctl");
        }

        let enable = get_onearg!(interface::get_ioctl_long(ptrunion));
        let newflags = if enable != 0 { flags | O_NDELAY } else { flags & !O_NDELAY };

        let ret = self.kernel.fcntl(fd, IoctlPtrUnion::from_scalar(newflags as isize), F_SETFL);
        if ret < 0 {
            return interface::native_error(ret, "ioctl");
        }
        0
    }
}
