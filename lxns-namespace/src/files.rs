//! Namespace files under `/proc/<pid>/ns`

use std::fs::{self, File};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use lxns_core::{Error, ProcessId, Result};
use serde::Serialize;

/// Entry names under `/proc/<pid>/ns`, in iteration order
pub const ENTRIES: [&str; 10] = [
    "mnt",
    "uts",
    "ipc",
    "net",
    "pid",
    "pid_for_children",
    "user",
    "cgroup",
    "time",
    "time_for_children",
];

/// A namespace file and the inode it resolved to
///
/// The inode is read once at construction and is `None` when the path does
/// not exist, e.g. `time` on kernels without time namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceFile {
    path: PathBuf,
    ino: Option<u64>,
}

impl NamespaceFile {
    /// Stat `path` and record its inode
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ino = fs::metadata(&path).ok().map(|meta| meta.ino());
        Self { path, ino }
    }

    /// Path to the namespace file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inode number identifying the namespace
    #[must_use]
    pub const fn ino(&self) -> Option<u64> {
        self.ino
    }

    /// Open the file for use with `setns(2)`
    pub fn open(&self) -> Result<File> {
        File::open(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the link text, e.g. `uts:[4026531838]`
    pub fn read_link(&self) -> Result<String> {
        fs::read_link(&self.path)
            .map(|p| p.to_string_lossy().into_owned())
            .map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Namespace files of one process
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceFiles {
    pid: ProcessId,
    files: Vec<NamespaceFile>,
}

impl NamespaceFiles {
    /// Collect namespace files of the calling process
    #[must_use]
    pub fn current() -> Self {
        Self::for_pid(ProcessId::current())
    }

    /// Collect namespace files of `pid`
    #[must_use]
    pub fn for_pid(pid: ProcessId) -> Self {
        let dir = pid.ns_dir();
        let files = ENTRIES
            .iter()
            .map(|name| NamespaceFile::new(dir.join(name)))
            .collect();
        Self { pid, files }
    }

    /// Process these files belong to
    #[must_use]
    pub const fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Look up a file by entry name such as `"uts"` or `"pid_for_children"`
    pub fn get(&self, name: &str) -> Result<&NamespaceFile> {
        ENTRIES
            .iter()
            .position(|entry| *entry == name)
            .map(|idx| &self.files[idx])
            .ok_or_else(|| Error::UnknownNamespace {
                name: name.to_string(),
            })
    }

    /// Iterate over `(name, file)` pairs in [`ENTRIES`] order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &NamespaceFile)> {
        ENTRIES.iter().copied().zip(&self.files)
    }
}

impl std::fmt::Display for NamespaceFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Namespace files of PID {}:", self.pid)?;
        for (name, file) in self.iter() {
            match file.ino() {
                Some(ino) => writeln!(f, "  {name:<18} {ino}")?,
                None => writeln!(f, "  {name:<18} -")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_namespaces() {
        let files = NamespaceFiles::current();

        assert_eq!(files.pid(), ProcessId::current());
        assert!(files.get("uts").unwrap().ino().is_some());
        assert!(files.get("mnt").unwrap().ino().is_some());
    }

    #[test]
    fn test_missing_file_has_no_inode() {
        let file = NamespaceFile::new("/proc/self/ns/does_not_exist");
        assert_eq!(file.ino(), None);
        assert!(matches!(file.open(), Err(Error::Io { .. })));
    }

    #[test]
    fn test_get_unknown_entry() {
        let files = NamespaceFiles::for_pid(ProcessId::from_raw(1));
        let err = files.get("bogus").unwrap_err();
        assert!(matches!(err, Error::UnknownNamespace { .. }));
    }

    #[test]
    fn test_iteration_order_and_paths() {
        let files = NamespaceFiles::for_pid(ProcessId::from_raw(12345));
        let names: Vec<&str> = files.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ENTRIES);

        let uts = files.get("uts").unwrap();
        assert_eq!(uts.path(), Path::new("/proc/12345/ns/uts"));
    }

    #[test]
    fn test_inode_matches_link() {
        let file = NamespaceFiles::current().get("uts").unwrap().clone();
        let link = file.read_link().unwrap();

        assert!(link.starts_with("uts:["));
        assert_eq!(link, format!("uts:[{}]", file.ino().unwrap()));
    }

    #[test]
    fn test_namespace_files_display() {
        let display = format!("{}", NamespaceFiles::current());
        assert!(display.contains("uts"));
        assert!(display.contains("pid_for_children"));
    }
}
