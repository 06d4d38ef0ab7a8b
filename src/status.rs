use std::ffi::c_int;
use std::fmt;

use mlua_sys::*;

/// Status code returned by the Lua loader and `lua_pcall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Yield,
    RuntimeError,
    SyntaxError,
    MemoryError,
    HandlerError,
    FileError,
    /// A code outside the set Lua 5.4 documents.
    Unknown(i32),
}

impl Status {
    pub(crate) fn from_raw(code: c_int) -> Self {
        match code {
            LUA_OK => Status::Ok,
            LUA_YIELD => Status::Yield,
            LUA_ERRRUN => Status::RuntimeError,
            LUA_ERRSYNTAX => Status::SyntaxError,
            LUA_ERRMEM => Status::MemoryError,
            LUA_ERRERR => Status::HandlerError,
            LUA_ERRFILE => Status::FileError,
            other => Status::Unknown(other),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Yield => "yield",
            Status::RuntimeError => "runtime error",
            Status::SyntaxError => "syntax error",
            Status::MemoryError => "memory error",
            Status::HandlerError => "error in error handler",
            Status::FileError => "file error",
            Status::Unknown(_) => "unknown status",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unknown(code) => write!(f, "unknown status {code}"),
            other => f.write_str(other.name()),
        }
    }
}
