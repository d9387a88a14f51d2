#![allow(dead_code)]
use crate::interface;

use super::openstat::OpenStatTable;
use super::syscalls::ioctl_constants::*;
use super::syscalls::sys_constants::*;

pub static PROCESS_TABLE: interface::RustLazyGlobal<interface::RustHashMap<u64, interface::RustRfc<Process>>> =
    interface::RustLazyGlobal::new(|| interface::new_hashmap());

pub fn processtable_insert(pid: u64, process: Process) {
    PROCESS_TABLE.insert(pid, interface::RustRfc::new(process));
}

pub fn processtable_getref(pid: u64) -> Option<interface::RustRfc<Process>> {
    PROCESS_TABLE.get(&pid).map(|entry| entry.value().clone())
}

pub fn processtable_remove(pid: u64) {
    PROCESS_TABLE.remove(&pid);
}

pub fn processtable_clear() {
    PROCESS_TABLE.clear();
}

/// Where the MFP's GPIP byte (carrier, CTS, ring) is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModemStatusSource {
    /// The kernel reads the register for us through `Ssystem(S_TIOCMGET)`.
    Ssystem,
    /// Old kernels: peek the register ourselves, switching to supervisor
    /// mode around the access when needed.
    Supervisor,
}

impl ModemStatusSource {
    pub fn resolve(kernel: &dyn interface::MintKernel) -> ModemStatusSource {
        if kernel.has_ssystem() {
            ModemStatusSource::Ssystem
        } else {
            ModemStatusSource::Supervisor
        }
    }

    pub fn read_gpip(&self, kernel: &dyn interface::MintKernel) -> u16 {
        match self {
            ModemStatusSource::Ssystem => kernel.ssystem(S_TIOCMGET, MFP_BASE) as i16 as u16,
            ModemStatusSource::Supervisor => {
                if kernel.super_inquire() {
                    let ssp = kernel.super_enter();
                    let gpip = kernel.peek_mfp(MFP_BASE) & 0xff;
                    kernel.super_leave(ssp);
                    gpip
                } else {
                    kernel.peek_mfp(MFP_BASE) & 0xff
                }
            }
        }
    }
}

/// Terminal settings the kernel cannot keep for us. One copy per process,
/// shared by every descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatedLineDisciplineState {
    pub ttydisc: interface::MintLong,
    pub ldisc: interface::MintLong,
    pub tchars: interface::Tchars,
    pub ltchars: interface::Ltchars,
}

impl Default for EmulatedLineDisciplineState {
    fn default() -> Self {
        EmulatedLineDisciplineState {
            ttydisc: NTTYDISC,
            ldisc: LLITOUT,
            tchars: DEFAULT_TCHARS,
            ltchars: DEFAULT_LTCHARS,
        }
    }
}

pub struct Process {
    pub pid: u64,
    pub kernel: interface::RustRfc<dyn interface::MintKernel>,
    pub line_discipline: interface::RustLock<EmulatedLineDisciplineState>,
    pub open_stat: OpenStatTable,
    //capabilities are looked up once, when the process is set up
    pub mint_version: u16,
    pub modem_source: ModemStatusSource,
}

impl Process {
    pub fn new(pid: u64, kernel: interface::RustRfc<dyn interface::MintKernel>) -> Process {
        let mint_version = kernel.mint_version();
        let modem_source = ModemStatusSource::resolve(&*kernel);
        Process {
            pid: pid,
            kernel: kernel,
            line_discipline: interface::RustLock::new(EmulatedLineDisciplineState::default()),
            open_stat: OpenStatTable::new(),
            mint_version: mint_version,
            modem_source: modem_source,
        }
    }

    //plain TOS reports version 0 and is not considered an old MiNT
    pub fn has_broken_sctty(&self) -> bool {
        self.mint_version != 0 && self.mint_version < MINT_SCTTY_MIN_VERSION
    }
}
