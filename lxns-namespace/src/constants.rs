//! Namespace flag and clock identifier constants
//!
//! Values come from the platform's libc. Constants the target platform does
//! not provide are compiled out, so they are missing from both the named
//! items and the [`all`] table rather than present with a placeholder.

use libc::c_int;

/// Represents ipc namespace.
pub const NEWIPC: c_int = libc::CLONE_NEWIPC;

/// Represents mount namespace.
pub const NEWNS: c_int = libc::CLONE_NEWNS;

/// Represents network namespace.
pub const NEWNET: c_int = libc::CLONE_NEWNET;

/// Represents pid namespace.
pub const NEWPID: c_int = libc::CLONE_NEWPID;

/// Represents uts namespace.
pub const NEWUTS: c_int = libc::CLONE_NEWUTS;

/// Represents user namespace.
pub const NEWUSER: c_int = libc::CLONE_NEWUSER;

/// Represents cgroup namespace.
pub const NEWCGROUP: c_int = libc::CLONE_NEWCGROUP;

/// Represents time namespace.
#[cfg(lxns_time_ns)]
pub const NEWTIME: c_int = libc::CLONE_NEWTIME;

/// Represents the monotonic clock.
pub const MONOTONIC: libc::clockid_t = libc::CLOCK_MONOTONIC;

/// Represents the boottime clock.
#[cfg(lxns_clock_boottime)]
pub const BOOTTIME: libc::clockid_t = libc::CLOCK_BOOTTIME;

/// What a constant identifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantKind {
    /// Namespace flag for `unshare(2)` and `setns(2)`
    NamespaceFlag,
    /// Clock identifier, exported as data only
    Clock,
}

/// A named platform constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    /// Symbolic name
    pub name: &'static str,
    /// Platform value
    pub value: c_int,
    /// What the value identifies
    pub kind: ConstantKind,
}

impl Constant {
    const fn flag(name: &'static str, value: c_int) -> Self {
        Self {
            name,
            value,
            kind: ConstantKind::NamespaceFlag,
        }
    }

    const fn clock(name: &'static str, value: libc::clockid_t) -> Self {
        Self {
            name,
            value,
            kind: ConstantKind::Clock,
        }
    }
}

const NAMESPACE_FLAGS: &[Constant] = &[
    Constant::flag("NEWIPC", NEWIPC),
    Constant::flag("NEWNS", NEWNS),
    Constant::flag("NEWNET", NEWNET),
    Constant::flag("NEWPID", NEWPID),
    Constant::flag("NEWUTS", NEWUTS),
    Constant::flag("NEWUSER", NEWUSER),
    Constant::flag("NEWCGROUP", NEWCGROUP),
];

#[cfg(lxns_time_ns)]
const TIME_FLAGS: &[Constant] = &[Constant::flag("NEWTIME", NEWTIME)];
#[cfg(not(lxns_time_ns))]
const TIME_FLAGS: &[Constant] = &[];

#[cfg(lxns_clock_boottime)]
const CLOCKS: &[Constant] = &[
    Constant::clock("MONOTONIC", MONOTONIC),
    Constant::clock("BOOTTIME", BOOTTIME),
];
#[cfg(not(lxns_clock_boottime))]
const CLOCKS: &[Constant] = &[Constant::clock("MONOTONIC", MONOTONIC)];

/// Every constant available on this platform
pub fn all() -> impl Iterator<Item = &'static Constant> {
    NAMESPACE_FLAGS.iter().chain(TIME_FLAGS).chain(CLOCKS)
}

/// Look up a constant value by its symbolic name
#[must_use]
pub fn lookup(name: &str) -> Option<c_int> {
    all().find(|c| c.name == name).map(|c| c.value)
}
