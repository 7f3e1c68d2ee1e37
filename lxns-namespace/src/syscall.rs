//! Direct pass-throughs to `unshare(2)` and `setns(2)`
//!
//! Both calls return `0` on success and report kernel failures as
//! [`Error::Syscall`] carrying the untouched errno. Arguments are never
//! validated here; the kernel is the only judge of a flag or descriptor.

use std::os::fd::{AsFd, AsRawFd, RawFd};

use libc::c_int;
use lxns_core::{Error, Result};
use nix::errno::Errno;
use nix::sched::CloneFlags;
use tracing::{debug, error};

use crate::flags::NamespaceFlags;

/// Disassociate the caller from the namespaces named in `flags`
///
/// Calls `unshare(2)`; the calling thread moves into fresh namespaces of
/// each requested kind.
pub fn disassociate_namespaces(flags: c_int) -> Result<i32> {
    debug!(flags = %NamespaceFlags::from_bits(flags), "unshare");

    nix::sched::unshare(CloneFlags::from_bits_retain(flags))
        .map_err(|errno| syscall_error("unshare", errno))?;

    Ok(0)
}

/// Join the namespace referenced by `fd`
///
/// Calls `setns(2)`. A zero `nstype` lets the kernel accept any namespace
/// kind; otherwise the descriptor must refer to that kind. The descriptor is
/// left open.
pub fn join_namespace(fd: RawFd, nstype: c_int) -> Result<i32> {
    debug!(fd, nstype = %NamespaceFlags::from_bits(nstype), "setns");

    // SAFETY: setns(2) only inspects its integer arguments; an invalid fd is
    // reported through errno.
    let ret = unsafe { libc::setns(fd, nstype) };
    Errno::result(ret).map_err(|errno| syscall_error("setns", errno))?;

    Ok(0)
}

/// Join the namespace referenced by an owned or borrowed descriptor
pub fn join_namespace_fd<Fd: AsFd>(fd: Fd, nstype: c_int) -> Result<i32> {
    let raw = fd.as_fd().as_raw_fd();
    debug!(fd = raw, nstype = %NamespaceFlags::from_bits(nstype), "setns");

    nix::sched::setns(fd, CloneFlags::from_bits_retain(nstype))
        .map_err(|errno| syscall_error("setns", errno))?;

    Ok(0)
}

pub(crate) fn syscall_error(call: &'static str, errno: Errno) -> Error {
    error!(call, errno = ?errno, error = %errno, "system call failed");
    Error::Syscall { call, errno }
}
