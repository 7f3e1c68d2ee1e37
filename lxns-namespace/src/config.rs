//! Namespace selection as data

use serde::{Deserialize, Serialize};

use crate::flags::{NamespaceFlags, NamespaceKind};

/// Which namespaces an operation should act on
///
/// Every field defaults to `false`; picking namespaces is up to the caller.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Select mount namespace
    pub mount: bool,

    /// Select UTS namespace (hostname)
    pub uts: bool,

    /// Select IPC namespace
    pub ipc: bool,

    /// Select network namespace
    pub network: bool,

    /// Select PID namespace
    pub pid: bool,

    /// Select user namespace
    pub user: bool,

    /// Select cgroup namespace
    pub cgroup: bool,

    /// Select time namespace
    pub time: bool,
}

impl NamespaceConfig {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every namespace available on this platform
    #[must_use]
    pub fn all() -> Self {
        Self::from_flags(NamespaceFlags::known())
    }

    /// Selection matching the kinds present in `flags`
    #[must_use]
    pub fn from_flags(flags: NamespaceFlags) -> Self {
        flags
            .kinds()
            .into_iter()
            .fold(Self::new(), |config, kind| config.with(kind, true))
    }

    /// Select or deselect one kind
    #[must_use]
    pub const fn with(mut self, kind: NamespaceKind, enable: bool) -> Self {
        match kind {
            NamespaceKind::Mount => self.mount = enable,
            NamespaceKind::Uts => self.uts = enable,
            NamespaceKind::Ipc => self.ipc = enable,
            NamespaceKind::Net => self.network = enable,
            NamespaceKind::Pid => self.pid = enable,
            NamespaceKind::User => self.user = enable,
            NamespaceKind::Cgroup => self.cgroup = enable,
            NamespaceKind::Time => self.time = enable,
        }
        self
    }

    /// Enable mount namespace
    #[must_use]
    pub const fn with_mount(self, enable: bool) -> Self {
        self.with(NamespaceKind::Mount, enable)
    }

    /// Enable UTS namespace
    #[must_use]
    pub const fn with_uts(self, enable: bool) -> Self {
        self.with(NamespaceKind::Uts, enable)
    }

    /// Enable IPC namespace
    #[must_use]
    pub const fn with_ipc(self, enable: bool) -> Self {
        self.with(NamespaceKind::Ipc, enable)
    }

    /// Enable network namespace
    #[must_use]
    pub const fn with_network(self, enable: bool) -> Self {
        self.with(NamespaceKind::Net, enable)
    }

    /// Enable PID namespace
    #[must_use]
    pub const fn with_pid(self, enable: bool) -> Self {
        self.with(NamespaceKind::Pid, enable)
    }

    /// Enable user namespace
    #[must_use]
    pub const fn with_user(self, enable: bool) -> Self {
        self.with(NamespaceKind::User, enable)
    }

    /// Enable cgroup namespace
    #[must_use]
    pub const fn with_cgroup(self, enable: bool) -> Self {
        self.with(NamespaceKind::Cgroup, enable)
    }

    /// Enable time namespace
    #[must_use]
    pub const fn with_time(self, enable: bool) -> Self {
        self.with(NamespaceKind::Time, enable)
    }

    /// Check whether `kind` is selected
    #[must_use]
    pub const fn is_selected(&self, kind: NamespaceKind) -> bool {
        match kind {
            NamespaceKind::Mount => self.mount,
            NamespaceKind::Uts => self.uts,
            NamespaceKind::Ipc => self.ipc,
            NamespaceKind::Net => self.network,
            NamespaceKind::Pid => self.pid,
            NamespaceKind::User => self.user,
            NamespaceKind::Cgroup => self.cgroup,
            NamespaceKind::Time => self.time,
        }
    }

    /// Convert to a flag mask
    ///
    /// Kinds the platform cannot express are dropped with a warning.
    #[must_use]
    pub fn to_flags(&self) -> NamespaceFlags {
        NamespaceKind::ALL
            .into_iter()
            .filter(|kind| self.is_selected(*kind))
            .filter(|kind| {
                let available = kind.flag().is_some();
                if !available {
                    tracing::warn!(namespace = %kind, "namespace not supported on this platform");
                }
                available
            })
            .collect()
    }

    /// Check if any namespaces are selected
    #[must_use]
    pub fn has_any(&self) -> bool {
        NamespaceKind::ALL.into_iter().any(|kind| self.is_selected(kind))
    }

    /// Get list of selected `/proc/<pid>/ns` entry names
    #[must_use]
    pub fn enabled_namespaces(&self) -> Vec<&'static str> {
        NamespaceKind::ALL
            .into_iter()
            .filter(|kind| self.is_selected(*kind))
            .map(NamespaceKind::proc_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;

    #[test]
    fn test_default_config() {
        let config = NamespaceConfig::default();
        assert!(!config.has_any());
        assert!(config.to_flags().is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = NamespaceConfig::new()
            .with_pid(true)
            .with_network(false)
            .with_uts(true);

        assert!(config.pid);
        assert!(!config.network);
        assert!(config.uts);
        assert_eq!(config.enabled_namespaces(), vec!["uts", "pid"]);
    }

    #[test]
    fn test_clone_flags_conversion() {
        let config = NamespaceConfig::new().with_pid(true).with_network(true);

        let flags = config.to_flags();
        assert_eq!(flags.bits(), constants::NEWPID | constants::NEWNET);
    }

    #[test]
    fn test_all_matches_known_flags() {
        assert_eq!(NamespaceConfig::all().to_flags(), NamespaceFlags::known());
    }

    #[test]
    fn test_from_json() {
        let config: NamespaceConfig =
            serde_json::from_str(r#"{"uts": true, "mount": true}"#).unwrap();

        assert_eq!(config, NamespaceConfig::new().with_uts(true).with_mount(true));
        assert_eq!(
            config.to_flags().bits(),
            constants::NEWUTS | constants::NEWNS
        );
    }

    #[test]
    fn test_from_flags() {
        let flags = NamespaceFlags::from_chars("iU").unwrap();
        let config = NamespaceConfig::from_flags(flags);

        assert!(config.ipc);
        assert!(config.user);
        assert!(!config.mount);
        assert_eq!(config.to_flags(), flags);
    }
}
