use std::ffi::{CStr, c_int};

use mlua_sys::*;
use tracing::debug;

use crate::status::Status;

/// Error type for Lua host operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Loading or running a script did not finish with `LUA_OK`.
    #[error("execution failure ({status})")]
    Execution { status: Status },
    /// The global's dynamic type cannot be converted to the requested type.
    #[error("conversion impossible: expected {expected}, got {got}")]
    Conversion {
        expected: &'static str,
        got: &'static str,
    },
    /// The global is a number that does not fit the requested integer type.
    #[error("conversion impossible: number out of range for {target}")]
    OutOfRange { target: &'static str },
    /// A global name that cannot be handed to the C API.
    #[error("invalid global name {0:?}")]
    InvalidName(String),
    /// Runtime-level error (e.g. failed to create the Lua state).
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Turn a raw status code into `Ok(Status::Ok)` or [`Error::Execution`].
///
/// On failure Lua leaves an error object on top of the stack. It is logged
/// here and left for the caller's [`StackGuard`](crate::stack::StackGuard) to
/// pop; only the status travels back.
pub(crate) fn check_status(state: *mut lua_State, code: c_int) -> Result<Status> {
    let status = Status::from_raw(code);
    if status.is_ok() {
        return Ok(status);
    }
    debug!(%status, message = %error_message(state), "lua execution failed");
    Err(Error::Execution { status })
}

/// Best-effort rendering of the error object on top of the stack.
fn error_message(state: *mut lua_State) -> String {
    unsafe {
        if lua_type(state, -1) != LUA_TSTRING {
            let tag = lua_type(state, -1);
            return CStr::from_ptr(lua_typename(state, tag))
                .to_string_lossy()
                .into_owned();
        }
        let ptr = lua_tolstring(state, -1, std::ptr::null_mut());
        if ptr.is_null() {
            return String::new();
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}
