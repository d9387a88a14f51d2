// System and hardware related constants
#![allow(dead_code)]

//MiNT versions before 1.16 answer TIOCSCTTY incorrectly
pub const MINT_SCTTY_MIN_VERSION: u16 = 0x110;
//version the host backend reports
pub const HOST_MINT_VERSION: u16 = 0x119;

//Ssystem modes
pub const S_TIOCMGET: i16 = 0x54c8;

//68901 MFP register block, GPIP is the low byte of the first word
pub const MFP_BASE: u32 = 0xfffffa00;
pub const MFP_DCD_BIT: u16 = 1 << 1;
pub const MFP_CTS_BIT: u16 = 1 << 2;
pub const MFP_RI_BIT: u16 = 1 << 6;

//YM2149 port A carries the outgoing modem lines
pub const PSG_PORT_A: i16 = 14;
pub const PSG_RTS_BIT: u8 = 1 << 3;
pub const PSG_DTR_BIT: u8 = 1 << 4;

//rdev of the built-in serial port (modem1)
pub const MODEM1_RDEV: u64 = 257;

//Line-A defaults the host backend falls back to: ST high resolution
pub const DEFAULT_CONSOLE_COLS: i16 = 80;
pub const DEFAULT_CONSOLE_ROWS: i16 = 25;
pub const DEFAULT_CONSOLE_XPIXEL: i16 = 640;
pub const DEFAULT_CONSOLE_YPIXEL: i16 = 400;
