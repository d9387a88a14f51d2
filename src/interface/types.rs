use crate::interface::errnos::{syscall_error, Errno};

// a C `long` on the 68k, which is what the tty requests read and write through
pub type MintLong = i32;

//sgttyb from the V7/BSD tty interface
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sgttyb {
    pub sg_ispeed: i8,
    pub sg_ospeed: i8,
    pub sg_erase: i8,
    pub sg_kill: i8,
    pub sg_flags: i16,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tchars {
    pub t_intrc: i8,
    pub t_quitc: i8,
    pub t_startc: i8,
    pub t_stopc: i8,
    pub t_eofc: i8,
    pub t_brkc: i8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ltchars {
    pub t_suspc: i8,
    pub t_dsuspc: i8,
    pub t_rprntc: i8,
    pub t_flushc: i8,
    pub t_werasc: i8,
    pub t_lnextc: i8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinSize {
    pub ws_row: i16,
    pub ws_col: i16,
    pub ws_xpixel: i16,
    pub ws_ypixel: i16,
}

//the extended attribute record FSTAT fills in; only the fields the tty code
//looks at are given real meaning by the host backend
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xattr {
    pub st_mode: u32,
    pub st_ino: u64,
    pub st_dev: u64,
    pub st_rdev: u64,
    pub st_nlink: u32,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_size: i64,
    pub st_blksize: i64,
    pub st_blocks: i64,
    pub st_mtime: i64,
    pub st_atime: i64,
    pub st_ctime: i64,
    pub st_attr: i16,
}

/// Text-console extents as published by the line-A variable block.
/// `max_cell_x`/`max_cell_y` are the highest cell indices, not counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleGeometry {
    pub max_cell_x: i16,
    pub max_cell_y: i16,
    pub x_max: i16,
    pub y_max: i16,
}

//the third ioctl argument: either a plain value or a pointer whose pointee
//type is selected by the request code
#[repr(C)]
#[derive(Copy, Clone)]
pub union IoctlPtrUnion {
    pub scalar: isize,
    pub long_ptr: *mut MintLong,
    pub winsize_ptr: *mut WinSize,
    pub sgttyb_ptr: *mut Sgttyb,
    pub tchars_ptr: *mut Tchars,
    pub ltchars_ptr: *mut Ltchars,
    pub xattr_ptr: *mut Xattr,
}

impl IoctlPtrUnion {
    pub fn from_scalar(value: isize) -> IoctlPtrUnion {
        IoctlPtrUnion { scalar: value }
    }

    pub fn null() -> IoctlPtrUnion {
        IoctlPtrUnion { scalar: 0 }
    }

    pub fn as_scalar(&self) -> isize {
        unsafe { self.scalar }
    }
}

//generic argument for the dispatcher
#[repr(C)]
#[derive(Copy, Clone)]
pub union Arg {
    pub dispatch_int: i32,
    pub dispatch_uint: u32,
    pub dispatch_long: i64,
    pub dispatch_isize: isize,
    pub dispatch_ioctlptrunion: IoctlPtrUnion,
}

pub fn get_int(union_argument: Arg) -> Result<i32, i32> {
    let data = unsafe { union_argument.dispatch_long };
    //the upper half must be a sign extension of the lower half
    if data == (data as i32) as i64 {
        return Ok(data as i32);
    }
    return Err(syscall_error(Errno::EINVAL, "dispatcher", "input data not valid"));
}

pub fn get_uint(union_argument: Arg) -> Result<u32, i32> {
    let data = unsafe { union_argument.dispatch_long } as u64;
    if data & !0xffff_ffffu64 == 0 {
        return Ok(data as u32);
    }
    return Err(syscall_error(Errno::EINVAL, "dispatcher", "input data not valid"));
}

pub fn get_ioctlptrunion(union_argument: Arg) -> Result<IoctlPtrUnion, i32> {
    return Ok(unsafe { union_argument.dispatch_ioctlptrunion }); //any bit pattern is a valid argument
}

pub fn get_ioctl_long(ptrunion: IoctlPtrUnion) -> Result<MintLong, i32> {
    let data = unsafe { ptrunion.long_ptr };
    if !data.is_null() {
        return Ok(unsafe { *data });
    }
    return Err(syscall_error(Errno::EFAULT, "ioctl", "argp is not a valid pointer"));
}

pub fn get_ioctl_mutlong<'a>(ptrunion: IoctlPtrUnion) -> Result<&'a mut MintLong, i32> {
    let data = unsafe { ptrunion.long_ptr };
    if !data.is_null() {
        return Ok(unsafe { &mut *data });
    }
    return Err(syscall_error(Errno::EFAULT, "ioctl", "argp is not a valid pointer"));
}

pub fn get_winsizestruct<'a>(ptrunion: IoctlPtrUnion) -> Result<&'a mut WinSize, i32> {
    let pointer = unsafe { ptrunion.winsize_ptr };
    if !pointer.is_null() {
        return Ok(unsafe { &mut *pointer });
    }
    return Err(syscall_error(Errno::EFAULT, "ioctl", "argp is not a valid pointer"));
}

pub fn get_sgttybstruct<'a>(ptrunion: IoctlPtrUnion) -> Result<&'a mut Sgttyb, i32> {
    let pointer = unsafe { ptrunion.sgttyb_ptr };
    if !pointer.is_null() {
        return Ok(unsafe { &mut *pointer });
    }
    return Err(syscall_error(Errno::EFAULT, "ioctl", "argp is not a valid pointer"));
}

pub fn get_tcharsstruct<'a>(ptrunion: IoctlPtrUnion) -> Result<&'a mut Tchars, i32> {
    let pointer = unsafe { ptrunion.tchars_ptr };
    if !pointer.is_null() {
        return Ok(unsafe { &mut *pointer });
    }
    return Err(syscall_error(Errno::EFAULT, "ioctl", "argp is not a valid pointer"));
}

pub fn get_ltcharsstruct<'a>(ptrunion: IoctlPtrUnion) -> Result<&'a mut Ltchars, i32> {
    let pointer = unsafe { ptrunion.ltchars_ptr };
    if !pointer.is_null() {
        return Ok(unsafe { &mut *pointer });
    }
    return Err(syscall_error(Errno::EFAULT, "ioctl", "argp is not a valid pointer"));
}

pub fn get_xattrstruct<'a>(ptrunion: IoctlPtrUnion) -> Result<&'a mut Xattr, i32> {
    let pointer = unsafe { ptrunion.xattr_ptr };
    if !pointer.is_null() {
        return Ok(unsafe { &mut *pointer });
    }
    return Err(syscall_error(Errno::EFAULT, "fcntl", "argp is not a valid pointer"));
}

//build argument unions from references, used by callers of the native
//primitive and by tests
pub fn ioctl_ptr<T>(pointee: &mut T) -> IoctlPtrUnion {
    IoctlPtrUnion { scalar: pointee as *mut T as isize }
}

pub fn ioctl_arg(ptrunion: IoctlPtrUnion) -> Arg {
    let mut arg = Arg { dispatch_long: 0 };
    arg.dispatch_ioctlptrunion = ptrunion;
    arg
}

pub fn int_arg(value: i32) -> Arg {
    Arg { dispatch_long: value as i64 }
}

pub fn uint_arg(value: u32) -> Arg {
    Arg { dispatch_long: value as i64 }
}
