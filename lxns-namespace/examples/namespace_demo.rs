//! Leave the UTS namespace, change the hostname, then come back
//!
//! Run with: sudo cargo run -p lxns-namespace --example namespace_demo

use std::os::fd::AsRawFd;

use anyhow::{Context, Result};
use lxns_namespace::{NamespaceFiles, constants, join_namespace, ops};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let original = NamespaceFiles::current();
    print!("{original}");

    // Keep a handle on the original namespace so we can return to it.
    let uts = original.get("uts")?;
    let handle = uts.open()?;
    println!("before: {}", uts.read_link()?);

    ops::unshare("u").context("unshare(CLONE_NEWUTS) needs CAP_SYS_ADMIN")?;
    nix::unistd::sethostname("lxns-demo")?;
    println!(
        "after unshare: {} hostname={}",
        NamespaceFiles::current().get("uts")?.read_link()?,
        nix::unistd::gethostname()?.to_string_lossy()
    );

    join_namespace(handle.as_raw_fd(), constants::NEWUTS)?;
    println!(
        "after setns: {} hostname={}",
        NamespaceFiles::current().get("uts")?.read_link()?,
        nix::unistd::gethostname()?.to_string_lossy()
    );

    Ok(())
}
