// Process related system calls
use crate::interface;
use crate::mintlib::process::Process;

impl Process {
    // BSD flavoured setpgrp(pid, pgrp); 0 for either means the caller
    pub fn bsd_setpgrp_syscall(&self, pid: i32, pgrp: i32) -> i32 {
        let ret = self.kernel.psetpgrp(pid, pgrp);
        if ret < 0 {
            return interface::native_error(ret, "setpgrp");
        }
        0
    }

    // System V setpgrp(): make the caller the leader of a new group
    pub fn setpgrp_syscall(&self) -> i32 {
        self.bsd_setpgrp_syscall(0, 0)
    }
}
