//! A small, safe host for an embedded Lua 5.4 runtime.
//!
//! Built on top of [`mlua_sys`] (the raw Lua C API), this crate owns one Lua
//! state per [`Runtime`], runs scripts from strings or files, and reads
//! globals back with type-checked conversion.
//!
//! # Quick start
//!
//! ```rust
//! use luahost::Runtime;
//!
//! let rt = Runtime::new().unwrap();
//!
//! rt.exec("a = 42; greeting = 'hello'").unwrap();
//! assert_eq!(rt.get_global::<i32>("a").unwrap(), 42);
//! assert_eq!(rt.get_global::<String>("greeting").unwrap(), "hello");
//! ```

mod config;
mod convert;
mod error;
mod stack;
mod status;
mod value;

pub use config::{RuntimeConfig, RuntimeConfigBuilder};
pub use convert::FromLua;
pub use error::{Error, Result};
pub use status::Status;
pub use value::ValueKind;

/// The raw Lua C API, for use with [`Runtime::as_raw`].
pub use mlua_sys as ffi;

use std::ffi::{CStr, CString, c_char, c_int};
use std::marker::PhantomData;
use std::path::Path;

use mlua_sys::*;
use tracing::debug;

use crate::stack::StackGuard;

const EXEC_CHUNK_NAME: &CStr = c"=<exec>";

/// An embedded Lua runtime.
///
/// Owns the underlying `lua_State`; the state is closed when the runtime is
/// dropped.
///
/// **Not `Send` or `Sync`**: a Lua state is single-threaded.
pub struct Runtime {
    raw: *mut lua_State,
    _not_send_sync: PhantomData<*mut ()>,
}

impl Runtime {
    /// Create a new Lua runtime with the standard libraries opened.
    pub fn new() -> Result<Self> {
        Self::with_config(RuntimeConfig::default())
    }

    /// Create a new Lua runtime with the given configuration.
    pub fn with_config(config: RuntimeConfig) -> Result<Self> {
        let raw = unsafe { luaL_newstate() };
        if raw.is_null() {
            return Err(Error::Runtime("failed to create Lua state".into()));
        }
        if config.open_libs {
            unsafe { luaL_openlibs(raw) };
        }
        debug!(state = ?raw, open_libs = config.open_libs, "lua state created");
        Ok(Runtime {
            raw,
            _not_send_sync: PhantomData,
        })
    }

    /// Compile and run a Lua chunk from a string.
    ///
    /// Returns [`Status::Ok`] on success. Any other status is reported as
    /// [`Error::Execution`].
    pub fn exec(&self, script: &str) -> Result<Status> {
        let _guard = StackGuard::new(self.raw);
        debug!(chunk = ?EXEC_CHUNK_NAME, len = script.len(), "executing lua chunk");
        let code = unsafe {
            luaL_loadbufferx(
                self.raw,
                script.as_ptr() as *const c_char,
                script.len(),
                EXEC_CHUNK_NAME.as_ptr(),
                std::ptr::null(),
            )
        };
        error::check_status(self.raw, code)?;
        self.call_loaded_chunk()
    }

    /// Compile and run a Lua file.
    ///
    /// Missing or unreadable files fail the same way as script errors, with
    /// [`Status::FileError`].
    pub fn exec_file(&self, path: impl AsRef<Path>) -> Result<Status> {
        let path = path.as_ref();
        let _guard = StackGuard::new(self.raw);
        debug!(chunk = %path.display(), "executing lua file");
        let c_path = path
            .to_str()
            .and_then(|p| CString::new(p).ok())
            .ok_or(Error::Execution {
                status: Status::FileError,
            })?;
        let code = unsafe { luaL_loadfilex(self.raw, c_path.as_ptr(), std::ptr::null()) };
        error::check_status(self.raw, code)?;
        self.call_loaded_chunk()
    }

    /// Run the chunk the loader left on top of the stack.
    fn call_loaded_chunk(&self) -> Result<Status> {
        let code = unsafe { lua_pcall(self.raw, 0, 0, 0) };
        error::check_status(self.raw, code)
    }

    /// Read a global variable and convert it to `T`.
    ///
    /// A missing global reads as `nil`, which no target type accepts.
    ///
    /// ```rust
    /// # let rt = luahost::Runtime::new().unwrap();
    /// rt.exec("pi = 3.14").unwrap();
    /// let pi: f64 = rt.get_global("pi").unwrap();
    /// assert!((pi - 3.14).abs() < 1e-9);
    /// assert!(rt.get_global::<String>("pi").is_err());
    /// ```
    pub fn get_global<T: FromLua>(&self, name: &str) -> Result<T> {
        let _guard = StackGuard::new(self.raw);
        self.push_global(name)?;
        T::from_lua(self, -1)
    }

    /// Report the dynamic type of a global without converting it.
    pub fn global_kind(&self, name: &str) -> Result<ValueKind> {
        let _guard = StackGuard::new(self.raw);
        let tag = self.push_global(name)?;
        Ok(ValueKind::from_raw(tag))
    }

    /// Push the global `name` and return its type tag.
    ///
    /// The lookup runs under `lua_pcall`: a metamethod on `_G` may raise, and
    /// an unprotected error would abort the process.
    fn push_global(&self, name: &str) -> Result<i32> {
        let c_name = CString::new(name).map_err(|_| Error::InvalidName(name.to_owned()))?;
        let code = unsafe {
            lua_pushcfunction(self.raw, read_global);
            lua_pushstring(self.raw, c_name.as_ptr());
            lua_pcall(self.raw, 1, 1, 0)
        };
        error::check_status(self.raw, code)?;
        Ok(unsafe { lua_type(self.raw, -1) })
    }

    /// The raw `lua_State` pointer, for calling [`ffi`] functions directly.
    ///
    /// The runtime keeps ownership; do not close the returned state.
    pub fn as_raw(&self) -> *mut lua_State {
        self.raw
    }
}

/// `read_global(name)`: the global named by the string argument.
unsafe extern "C-unwind" fn read_global(state: *mut lua_State) -> c_int {
    unsafe {
        let name = lua_tolstring(state, 1, std::ptr::null_mut());
        lua_getglobal(state, name);
    }
    1
}

impl Drop for Runtime {
    fn drop(&mut self) {
        debug!(state = ?self.raw, "closing lua state");
        unsafe { lua_close(self.raw) }
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime({:?})", self.raw)
    }
}
