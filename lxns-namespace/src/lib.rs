//! Linux namespace syscall bindings
//!
//! This crate exposes the two namespace system calls and their constants:
//! - `unshare(2)` - move the caller into new namespaces
//! - `setns(2)` - move the caller into an existing namespace
//! - `CLONE_NEW*` flags and clock identifiers, as the platform provides them
//!
//! On top of the raw calls it offers shorthand flag strings, joining another
//! process's namespaces by pid, inspection of `/proc/<pid>/ns`, and entry
//! points for dynamically typed host values.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

#[cfg(not(any(target_os = "linux", target_os = "android")))]
compile_error!("lxns-namespace only supports Linux targets");

pub mod config;
pub mod constants;
pub mod dynamic;
pub mod files;
pub mod flags;
pub mod ops;
pub mod syscall;

pub use config::NamespaceConfig;
pub use files::{NamespaceFile, NamespaceFiles};
pub use flags::{FlagsArg, NamespaceFlags, NamespaceKind};
pub use syscall::{disassociate_namespaces, join_namespace, join_namespace_fd};
