//! Flag-string aware `unshare` and pid-targeted `setns`

use std::fs::File;

use lxns_core::{ProcessId, Result};
use nix::errno::Errno;
use tracing::{debug, info};

use crate::flags::{FlagsArg, NamespaceKind};
use crate::syscall::{self, syscall_error};

/// Order in which namespaces are entered by [`setns`]
///
/// The user namespace comes first: it grants the capabilities the other
/// joins require.
pub const JOIN_ORDER: [NamespaceKind; 8] = [
    NamespaceKind::User,
    NamespaceKind::Cgroup,
    NamespaceKind::Ipc,
    NamespaceKind::Uts,
    NamespaceKind::Net,
    NamespaceKind::Pid,
    NamespaceKind::Mount,
    NamespaceKind::Time,
];

/// Disassociate namespaces given as a mask or a shorthand string
///
/// ```no_run
/// use lxns_namespace::{constants, ops};
///
/// ops::unshare(constants::NEWUTS)?;
/// ops::unshare("um")?;
/// # Ok::<(), lxns_core::Error>(())
/// ```
pub fn unshare(flags: impl Into<FlagsArg>) -> Result<i32> {
    let flags = flags.into().resolve()?;
    syscall::disassociate_namespaces(flags.bits())
}

/// Join the namespaces of `pid` named by `flags`
///
/// All namespace files are opened before the first join. Bits that match no
/// namespace kind are rejected with `EINVAL` and nothing is joined.
pub fn setns(flags: impl Into<FlagsArg>, pid: ProcessId) -> Result<i32> {
    let flags = flags.into().resolve()?;

    if flags.unknown_bits() != 0 {
        return Err(syscall_error("setns", Errno::EINVAL));
    }

    let dir = pid.ns_dir();
    let kinds = flags.kinds();

    let targets = JOIN_ORDER
        .into_iter()
        .filter(|kind| kinds.contains(kind))
        .filter_map(|kind| kind.flag().map(|flag| (kind, flag)))
        .map(|(kind, flag)| {
            let path = dir.join(kind.proc_name());
            File::open(&path)
                .map(|file| (kind, flag, file))
                .map_err(|source| lxns_core::Error::Io { path, source })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(%pid, namespaces = %flags, "joining namespaces");

    for (kind, flag, file) in &targets {
        debug!(namespace = %kind, "entering");
        syscall::join_namespace_fd(file, *flag)?;
    }

    Ok(0)
}
