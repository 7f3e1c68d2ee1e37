//! Namespace kinds and flag masks

use std::fmt;

use libc::c_int;
use lxns_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::constants;

/// A kind of Linux namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// Mount namespace
    Mount,
    /// UTS namespace (hostname and domain name)
    Uts,
    /// IPC namespace
    Ipc,
    /// Network namespace
    Net,
    /// PID namespace
    Pid,
    /// User namespace
    User,
    /// Cgroup namespace
    Cgroup,
    /// Time namespace
    Time,
}

impl NamespaceKind {
    /// Every kind, in `/proc/<pid>/ns` listing order
    pub const ALL: [Self; 8] = [
        Self::Mount,
        Self::Uts,
        Self::Ipc,
        Self::Net,
        Self::Pid,
        Self::User,
        Self::Cgroup,
        Self::Time,
    ];

    /// Clone flag for this kind, if the platform defines one
    #[must_use]
    pub const fn flag(self) -> Option<c_int> {
        match self {
            Self::Mount => Some(constants::NEWNS),
            Self::Uts => Some(constants::NEWUTS),
            Self::Ipc => Some(constants::NEWIPC),
            Self::Net => Some(constants::NEWNET),
            Self::Pid => Some(constants::NEWPID),
            Self::User => Some(constants::NEWUSER),
            Self::Cgroup => Some(constants::NEWCGROUP),
            Self::Time => time_flag(),
        }
    }

    /// Entry name under `/proc/<pid>/ns`
    #[must_use]
    pub const fn proc_name(self) -> &'static str {
        match self {
            Self::Mount => "mnt",
            Self::Uts => "uts",
            Self::Ipc => "ipc",
            Self::Net => "net",
            Self::Pid => "pid",
            Self::User => "user",
            Self::Cgroup => "cgroup",
            Self::Time => "time",
        }
    }

    /// Shorthand character used in flag strings
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Mount => 'm',
            Self::Uts => 'u',
            Self::Ipc => 'i',
            Self::Net => 'n',
            Self::Pid => 'p',
            Self::User => 'U',
            Self::Cgroup => 'C',
            Self::Time => 'T',
        }
    }

    /// Kind for a shorthand character
    #[must_use]
    pub fn from_short(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.short() == c)
    }

    /// Kinds whose flag exists on this platform
    pub fn available() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|kind| kind.flag().is_some())
    }
}

#[cfg(lxns_time_ns)]
const fn time_flag() -> Option<c_int> {
    Some(constants::NEWTIME)
}

#[cfg(not(lxns_time_ns))]
const fn time_flag() -> Option<c_int> {
    None
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proc_name())
    }
}

/// Raw namespace flag mask as passed to the kernel
///
/// Any integer is accepted; only the kernel decides what is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NamespaceFlags(c_int);

impl NamespaceFlags {
    /// No namespaces
    pub const NONE: Self = Self(0);

    /// Create from raw value
    #[must_use]
    pub const fn from_bits(bits: c_int) -> Self {
        Self(bits)
    }

    /// Get raw value
    #[must_use]
    pub const fn bits(self) -> c_int {
        self.0
    }

    /// Check if flag is set
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if no bits are set
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Mask of every flag available on this platform
    #[must_use]
    pub fn known() -> Self {
        NamespaceKind::available().map(Self::from).fold(Self::NONE, |acc, f| acc | f)
    }

    /// Bits that match no available namespace kind
    #[must_use]
    pub fn unknown_bits(self) -> c_int {
        self.0 & !Self::known().0
    }

    /// Available kinds present in this mask
    #[must_use]
    pub fn kinds(self) -> Vec<NamespaceKind> {
        NamespaceKind::available()
            .filter(|kind| self.contains(Self::from(*kind)))
            .collect()
    }

    /// Parse a shorthand string such as `"um"`
    ///
    /// `i` ipc, `m` mount, `n` net, `p` pid, `u` uts, `U` user, `C` cgroup,
    /// `T` time. Characters whose namespace is unavailable are rejected.
    pub fn from_chars(chars: &str) -> Result<Self> {
        chars.chars().try_fold(Self::NONE, |flags, c| {
            NamespaceKind::from_short(c)
                .and_then(NamespaceKind::flag)
                .map(|bits| flags | Self(bits))
                .ok_or(Error::UnsupportedFlag { flag: c })
        })
    }
}

impl From<NamespaceKind> for NamespaceFlags {
    fn from(kind: NamespaceKind) -> Self {
        Self(kind.flag().unwrap_or(0))
    }
}

impl FromIterator<NamespaceKind> for NamespaceFlags {
    fn from_iter<I: IntoIterator<Item = NamespaceKind>>(iter: I) -> Self {
        iter.into_iter().map(Self::from).fold(Self::NONE, |acc, f| acc | f)
    }
}

impl std::ops::BitOr for NamespaceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for NamespaceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for NamespaceFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for NamespaceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.kinds().iter().map(ToString::to_string).collect();
        let unknown = self.unknown_bits();
        if unknown != 0 {
            parts.push(format!("{unknown:#x}"));
        }
        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join("|"))
        }
    }
}

/// A flags argument: either a raw mask or a shorthand string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsArg {
    /// Raw bitmask
    Bits(c_int),
    /// Shorthand characters, see [`NamespaceFlags::from_chars`]
    Chars(String),
}

impl FlagsArg {
    /// Resolve to a flag mask
    pub fn resolve(&self) -> Result<NamespaceFlags> {
        match self {
            Self::Bits(bits) => Ok(NamespaceFlags::from_bits(*bits)),
            Self::Chars(chars) => NamespaceFlags::from_chars(chars),
        }
    }
}

impl From<c_int> for FlagsArg {
    fn from(bits: c_int) -> Self {
        Self::Bits(bits)
    }
}

impl From<NamespaceFlags> for FlagsArg {
    fn from(flags: NamespaceFlags) -> Self {
        Self::Bits(flags.bits())
    }
}

impl From<NamespaceKind> for FlagsArg {
    fn from(kind: NamespaceKind) -> Self {
        NamespaceFlags::from(kind).into()
    }
}

impl From<&str> for FlagsArg {
    fn from(chars: &str) -> Self {
        Self::Chars(chars.to_owned())
    }
}

impl From<String> for FlagsArg {
    fn from(chars: String) -> Self {
        Self::Chars(chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chars() {
        let flags = NamespaceFlags::from_chars("um").unwrap();
        assert_eq!(flags.bits(), constants::NEWUTS | constants::NEWNS);

        let flags = NamespaceFlags::from_chars("imnpuUC").unwrap();
        assert_eq!(
            flags.bits(),
            constants::NEWIPC
                | constants::NEWNS
                | constants::NEWNET
                | constants::NEWPID
                | constants::NEWUTS
                | constants::NEWUSER
                | constants::NEWCGROUP
        );
    }

    #[test]
    fn test_from_chars_empty() {
        assert_eq!(NamespaceFlags::from_chars("").unwrap(), NamespaceFlags::NONE);
    }

    #[test]
    fn test_from_chars_rejects_unknown() {
        let err = NamespaceFlags::from_chars("ux").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFlag { flag: 'x' }));

        let alphabet: String = ('A'..='Z').chain('a'..='z').collect();
        assert!(NamespaceFlags::from_chars(&alphabet).is_err());
    }

    #[test]
    fn test_kinds_roundtrip_shorthand() {
        for kind in NamespaceKind::available() {
            assert_eq!(NamespaceKind::from_short(kind.short()), Some(kind));
            let flags = NamespaceFlags::from_chars(&kind.short().to_string()).unwrap();
            assert_eq!(flags.kinds(), vec![kind]);
        }
    }

    #[test]
    fn test_namespace_flags() {
        let flags = NamespaceFlags::from(NamespaceKind::Pid) | NamespaceKind::Net.into();

        assert!(flags.contains(NamespaceKind::Pid.into()));
        assert!(flags.contains(NamespaceKind::Net.into()));
        assert!(!flags.contains(NamespaceKind::Mount.into()));
        assert_eq!(flags.kinds(), vec![NamespaceKind::Net, NamespaceKind::Pid]);
    }

    #[test]
    fn test_unknown_bits() {
        assert_eq!(NamespaceFlags::known().unknown_bits(), 0);
        assert_ne!(NamespaceFlags::from_bits(-1).unknown_bits(), 0);
        assert_eq!(NamespaceFlags::from_bits(constants::NEWUTS).unknown_bits(), 0);
    }

    #[test]
    fn test_display() {
        let flags: NamespaceFlags = [NamespaceKind::Uts, NamespaceKind::Mount].into_iter().collect();
        assert_eq!(flags.to_string(), "mnt|uts");
        assert_eq!(NamespaceFlags::NONE.to_string(), "none");
        assert_eq!(NamespaceFlags::from_bits(0x1).to_string(), "0x1");
    }

    #[test]
    fn test_flags_arg_resolve() {
        assert_eq!(
            FlagsArg::from("u").resolve().unwrap(),
            NamespaceFlags::from_bits(constants::NEWUTS)
        );
        assert_eq!(FlagsArg::from(-1).resolve().unwrap().bits(), -1);
        assert!(FlagsArg::from("?").resolve().is_err());
    }
}
