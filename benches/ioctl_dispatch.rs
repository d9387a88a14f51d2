/* Benchmarks for the ioctl emulation.  As with the other benches, results
 * are not checked here to avoid adding bias to the timings.  */

use criterion::{criterion_group, criterion_main, Criterion};
use std::os::unix::io::AsRawFd;

use mintposix::interface;
use mintposix::mintlib::dispatcher::*;
use mintposix::mintlib::process::processtable_getref;
use mintposix::mintlib::syscalls::ioctl_constants::*;

pub fn run_benchmark(c: &mut Criterion) {
    // Same setup the C entry points use: one process backed by the host.
    mintrustinit(0);
    let process = match processtable_getref(CURRENT_PID) {
        Some(process) => process,
        None => return,
    };

    // A plain file never looks like a terminal, so every request below
    // goes native first and then through the emulation table.
    let file = tempfile::tempfile().unwrap();
    let fd = file.as_raw_fd();

    let mut group = c.benchmark_group("ioctl emulation");

    // The first isatty per handle asks the kernel, every later one is a
    // table lookup.
    group.bench_function("TI01: cached isatty", |b| {
        b.iter(|| {
            process.isatty_syscall(fd);
        })
    });
    group.bench_function("TI01: native isatty", |b| {
        b.iter(|| unsafe {
            libc::isatty(fd);
        })
    });

    // FIONBIO costs two fcntl calls on top of the failed native attempt.
    let mut on: interface::MintLong = 1;
    group.bench_function("TI02: emulated FIONBIO", |b| {
        b.iter(|| {
            process.ioctl_syscall(fd, FIONBIO, interface::ioctl_ptr(&mut on));
        })
    });

    // Full trip through the numbered dispatcher for a request that ends in
    // ENOSYS.
    let mut disc: interface::MintLong = 0;
    group.bench_function("TI03: dispatched TIOCGETD", |b| {
        b.iter(|| {
            dispatcher(
                CURRENT_PID,
                IOCTL_SYSCALL,
                interface::int_arg(fd),
                interface::uint_arg(TIOCGETD),
                interface::ioctl_arg(interface::ioctl_ptr(&mut disc)),
            );
        })
    });
    group.finish();

    mintrustfinalize();
}

criterion_group!(benches, run_benchmark);
criterion_main!(benches);
