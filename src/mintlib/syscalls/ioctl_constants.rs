// Terminal and device control constants
#![allow(dead_code)]

use crate::interface::{Ltchars, Tchars};

const fn tioc(nr: u32) -> u32 {
    ((b'T' as u32) << 8) | nr
}

const fn fioc(nr: u32) -> u32 {
    ((b'F' as u32) << 8) | nr
}

//Requests for IOCTL
pub const TIOCGETP: u32 = tioc(0);
pub const TIOCSETP: u32 = tioc(1);
pub const TIOCSETN: u32 = tioc(2);
pub const TIOCGETC: u32 = tioc(3);
pub const TIOCSETC: u32 = tioc(4);
pub const TIOCGLTC: u32 = tioc(5);
pub const TIOCSLTC: u32 = tioc(6);
pub const TIOCGPGRP: u32 = tioc(7);
pub const TIOCSPGRP: u32 = tioc(8);
pub const TIOCFLUSH: u32 = tioc(9);
pub const TIOCSTOP: u32 = tioc(10);
pub const TIOCSTART: u32 = tioc(11);
pub const TIOCGWINSZ: u32 = tioc(12);
pub const TIOCSWINSZ: u32 = tioc(13);
pub const TIOCIBAUD: u32 = tioc(18);
pub const TIOCOBAUD: u32 = tioc(19);
pub const TIOCCBRK: u32 = tioc(20);
pub const TIOCSBRK: u32 = tioc(21);
pub const TIOCGFLAGS: u32 = tioc(22);
pub const TIOCSFLAGS: u32 = tioc(23);
pub const TIOCOUTQ: u32 = tioc(24);
pub const TIOCSCTTY: u32 = tioc(26);
pub const TIOCMGET: u32 = tioc(93);
pub const TIOCLBIS: u32 = tioc(246);
pub const TIOCLBIC: u32 = tioc(247);
pub const TIOCLSET: u32 = tioc(248);
pub const TIOCLGET: u32 = tioc(249);
pub const TIOCCDTR: u32 = tioc(250);
pub const TIOCSDTR: u32 = tioc(251);
pub const TIOCNOTTY: u32 = tioc(252);
pub const TIOCGETD: u32 = tioc(253);
pub const TIOCSETD: u32 = tioc(254);

pub const FSTAT: u32 = fioc(0);
pub const FIONREAD: u32 = fioc(1);
pub const FIONWRITE: u32 = fioc(2);
pub const FIONBIO: u32 = fioc(12);

//line disciplines
pub const OTTYDISC: i32 = 0;
pub const NETLDISC: i32 = 1;
pub const NTTYDISC: i32 = 2;

//local mode word
pub const LCRTBS: i32 = 0x0001;
pub const LPRTERA: i32 = 0x0002;
pub const LCRTERA: i32 = 0x0004;
pub const LTILDE: i32 = 0x0008;
pub const LMDMBUF: i32 = 0x0010;
pub const LLITOUT: i32 = 0x0020;
pub const LTOSTOP: i32 = 0x0040;
pub const LFLUSHO: i32 = 0x0080;
pub const LNOHANG: i32 = 0x0100;
pub const LCRTKIL: i32 = 0x0400;
pub const LCTLECH: i32 = 0x1000;
pub const LPENDIN: i32 = 0x2000;
pub const LDECCTQ: i32 = 0x4000;
pub const LNOFLSH: i32 = 0x8000;

//speeds
pub const B0: i8 = 0;
pub const B9600: i8 = 13;
pub const B19200: i8 = 14;

//modem lines reported by TIOCMGET
pub const TIOCM_LE: i32 = 0o001;
pub const TIOCM_DTR: i32 = 0o002;
pub const TIOCM_RTS: i32 = 0o004;
pub const TIOCM_ST: i32 = 0o010;
pub const TIOCM_SR: i32 = 0o020;
pub const TIOCM_CTS: i32 = 0o040;
pub const TIOCM_CAR: i32 = 0o100;
pub const TIOCM_RNG: i32 = 0o200;
pub const TIOCM_DSR: i32 = 0o400;

pub const fn ctrl(c: u8) -> i8 {
    (c & 0x1f) as i8
}

//erase and kill characters reported by TIOCGETP
pub const DEFAULT_ERASE: i8 = ctrl(b'H');
pub const DEFAULT_KILL: i8 = ctrl(b'U');

pub const DEFAULT_TCHARS: Tchars = Tchars {
    t_intrc: ctrl(b'C'),
    t_quitc: ctrl(b'\\'),
    t_startc: ctrl(b'Q'),
    t_stopc: ctrl(b'S'),
    t_eofc: ctrl(b'D'),
    t_brkc: -1,
};

pub const DEFAULT_LTCHARS: Ltchars = Ltchars {
    t_suspc: ctrl(b'Z'),
    t_dsuspc: ctrl(b'Y'),
    t_rprntc: ctrl(b'R'),
    t_flushc: ctrl(b'O'),
    t_werasc: ctrl(b'W'),
    t_lnextc: ctrl(b'V'),
};
