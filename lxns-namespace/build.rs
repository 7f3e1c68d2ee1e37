//! Probes the target platform for optional namespace and clock constants.
//!
//! Each probe that succeeds emits a `cfg` flag; constants behind a missing
//! flag are left out of the crate entirely.

use std::env;

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rustc-check-cfg=cfg(lxns_time_ns)");
    println!("cargo::rustc-check-cfg=cfg(lxns_clock_boottime)");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // CLONE_NEWTIME is only exported by libc for Linux proper.
    if target_os == "linux" {
        println!("cargo::rustc-cfg=lxns_time_ns");
    }

    if target_os == "linux" || target_os == "android" {
        println!("cargo::rustc-cfg=lxns_clock_boottime");
    }
}
