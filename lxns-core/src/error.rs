//! Error types for lxns

use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// lxns error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A system call reported failure through errno
    #[error("{call} failed: {errno:?} ({})", .errno.desc())]
    Syscall {
        /// Name of the failing system call
        call: &'static str,
        /// Errno reported by the kernel
        errno: Errno,
    },

    /// A host value could not be converted to a C integer
    #[error("cannot convert {param} to integer: {message}")]
    Conversion {
        /// Parameter being converted
        param: &'static str,
        /// Error message
        message: String,
    },

    /// Unknown namespace shorthand character
    #[error("unsupported flag character: {flag:?}")]
    UnsupportedFlag {
        /// Offending character
        flag: char,
    },

    /// Unknown `/proc/<pid>/ns` entry name
    #[error("unknown namespace file: {name}")]
    UnknownNamespace {
        /// Requested entry name
        name: String,
    },

    /// I/O error on a namespace file
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl Error {
    /// Errno carried by a system call failure
    #[must_use]
    pub const fn errno(&self) -> Option<Errno> {
        match self {
            Self::Syscall { errno, .. } => Some(*errno),
            _ => None,
        }
    }

    /// Numeric errno, or the raw OS error behind an I/O failure
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Syscall { errno, .. } => Some(*errno as i32),
            Self::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    /// Symbolic errno name such as `EPERM`
    #[must_use]
    pub fn errno_name(&self) -> Option<String> {
        self.errno().map(|errno| format!("{errno:?}"))
    }
}

/// Result type alias for lxns operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syscall_error_preserves_errno() {
        let err = Error::Syscall {
            call: "unshare",
            errno: Errno::EPERM,
        };

        assert_eq!(err.errno(), Some(Errno::EPERM));
        assert_eq!(err.raw_os_error(), Some(1));
        assert_eq!(err.errno_name().as_deref(), Some("EPERM"));
        assert!(err.to_string().starts_with("unshare failed: EPERM"));
    }

    #[test]
    fn test_non_syscall_errors_have_no_errno() {
        let err = Error::UnsupportedFlag { flag: 'x' };
        assert_eq!(err.errno(), None);
        assert_eq!(err.errno_name(), None);
        assert_eq!(err.to_string(), "unsupported flag character: 'x'");
    }

    #[test]
    fn test_io_error_raw_os_error() {
        let err = Error::Io {
            path: PathBuf::from("/proc/0/ns/uts"),
            source: std::io::Error::from_raw_os_error(2),
        };
        assert_eq!(err.raw_os_error(), Some(2));
        assert_eq!(err.errno(), None);
    }
}
