//! Entry points for dynamically typed host values
//!
//! Scripting hosts hand over loosely typed values. Every argument is
//! converted to a C `int` before any system call is made, so a bad value
//! never reaches the kernel.

use libc::c_int;
use lxns_core::{Error, ProcessId, Result};
use serde_json::Value;

use crate::flags::FlagsArg;
use crate::{ops, syscall};

/// Convert a host value to a C `int`
///
/// Integers must fit in an `int`. Finite floats are truncated toward zero.
/// Anything else is a conversion error.
#[allow(clippy::cast_possible_truncation)]
pub fn to_c_int(value: &Value, param: &'static str) -> Result<c_int> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return c_int::try_from(v)
                    .map_err(|_| conversion(param, format!("{v} out of range for int")));
            }
            let limit = -f64::from(c_int::MIN);
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= -limit && f < limit => Ok(f as c_int),
                _ => Err(conversion(param, format!("{n} out of range for int"))),
            }
        }
        other => Err(conversion(
            param,
            format!("no implicit conversion from {}", type_name(other)),
        )),
    }
}

/// Convert a host value to a flags argument: an integer or a shorthand string
pub fn to_flags_arg(value: &Value, param: &'static str) -> Result<FlagsArg> {
    match value {
        Value::String(chars) => Ok(FlagsArg::Chars(chars.clone())),
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            to_c_int(value, param).map(FlagsArg::Bits)
        }
        other => Err(conversion(
            param,
            format!("unsupported flags: {}", type_name(other)),
        )),
    }
}

/// `unshare(2)` with a raw integer value
pub fn disassociate_namespaces(flags: &Value) -> Result<i32> {
    let flags = to_c_int(flags, "flags")?;
    syscall::disassociate_namespaces(flags)
}

/// `setns(2)` with raw integer values
pub fn join_namespace(fd: &Value, nstype: &Value) -> Result<i32> {
    let fd = to_c_int(fd, "fd")?;
    let nstype = to_c_int(nstype, "nstype")?;
    syscall::join_namespace(fd, nstype)
}

/// [`ops::unshare`] with an integer or shorthand string value
pub fn unshare(flags: &Value) -> Result<i32> {
    ops::unshare(to_flags_arg(flags, "flags")?)
}

/// [`ops::setns`] with an integer or shorthand string value and a pid value
pub fn setns(flags: &Value, pid: &Value) -> Result<i32> {
    let flags = to_flags_arg(flags, "flags")?;
    let pid = ProcessId::from_raw(to_c_int(pid, "pid")?);
    ops::setns(flags, pid)
}

fn conversion(param: &'static str, message: String) -> Error {
    Error::Conversion { param, message }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
