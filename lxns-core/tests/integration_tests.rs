use lxns_core::*;
use nix::errno::Errno;

#[test]
fn test_process_id_serialization() {
    let pid = ProcessId::from_raw(4242);

    let json = serde_json::to_string(&pid).unwrap();
    assert_eq!(json, "4242");

    let deserialized: ProcessId = serde_json::from_str(&json).unwrap();
    assert_eq!(pid, deserialized);
}

#[test]
fn test_process_id_display() {
    let pid = ProcessId::from_raw(7);
    assert_eq!(format!("{pid}"), "7");
}

#[test]
fn test_process_id_nix_roundtrip() {
    let pid: nix::unistd::Pid = ProcessId::from_raw(99).into();
    assert_eq!(ProcessId::from(pid).as_raw(), 99);
}

#[test]
fn test_syscall_error_display() {
    let err = Error::Syscall {
        call: "setns",
        errno: Errno::EBADF,
    };

    let message = err.to_string();
    assert!(message.starts_with("setns failed: EBADF"));
    assert!(message.contains(Errno::EBADF.desc()));
    assert_eq!(err.raw_os_error(), Some(Errno::EBADF as i32));
}

#[test]
fn test_conversion_error_display() {
    let err = Error::Conversion {
        param: "flags",
        message: "expected integer, got string".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "cannot convert flags to integer: expected integer, got string"
    );
    assert!(err.errno().is_none());
}

#[test]
fn test_unknown_namespace_display() {
    let err = Error::UnknownNamespace {
        name: "bogus".to_string(),
    };
    assert_eq!(err.to_string(), "unknown namespace file: bogus");
}
