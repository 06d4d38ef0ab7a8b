use std::ffi::c_int;

use mlua_sys::*;

use crate::Runtime;
use crate::error::{Error, Result};
use crate::value::ValueKind;

/// Extract a Rust value from a slot on the Lua stack.
///
/// Implemented for the integer types, `f32`/`f64` and `String`. Requesting any
/// other type from [`Runtime::get_global`] does not compile. Number targets
/// also accept numeric strings; the string target accepts only strings.
pub trait FromLua: Sized {
    /// Convert the value at stack `index` without popping it.
    fn from_lua(rt: &Runtime, index: c_int) -> Result<Self>;
}

fn mismatch(expected: &'static str, kind: ValueKind) -> Error {
    Error::Conversion {
        expected,
        got: kind.name(),
    }
}

/// Read a number, or a string Lua can convert to one, as an integer.
/// Floats are truncated toward zero.
///
/// `i128` covers every Lua integer and every float in the `u64` range, so the
/// final narrowing is a single `TryFrom`.
fn integer_at(rt: &Runtime, index: c_int, target: &'static str) -> Result<i128> {
    let state = rt.as_raw();
    let mut isnum: c_int = 0;
    let n = unsafe { lua_tointegerx(state, index, &mut isnum) };
    if isnum != 0 {
        return Ok(i128::from(n));
    }
    let n = number_at(rt, index, "integer")?.trunc();
    if !n.is_finite() || n < i128::MIN as f64 || n >= i128::MAX as f64 {
        return Err(Error::OutOfRange { target });
    }
    Ok(n as i128)
}

/// Read a number, or a string Lua can convert to one, as a float.
fn number_at(rt: &Runtime, index: c_int, expected: &'static str) -> Result<f64> {
    let state = rt.as_raw();
    let mut isnum: c_int = 0;
    let n = unsafe { lua_tonumberx(state, index, &mut isnum) };
    if isnum == 0 {
        let kind = ValueKind::from_raw(unsafe { lua_type(state, index) });
        return Err(mismatch(expected, kind));
    }
    Ok(n)
}

macro_rules! from_lua_int {
    ($($ty:ty),*) => {$(
        impl FromLua for $ty {
            fn from_lua(rt: &Runtime, index: c_int) -> Result<Self> {
                let target = stringify!($ty);
                let n = integer_at(rt, index, target)?;
                <$ty>::try_from(n).map_err(|_| Error::OutOfRange { target })
            }
        }
    )*};
}

from_lua_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromLua for f64 {
    fn from_lua(rt: &Runtime, index: c_int) -> Result<Self> {
        number_at(rt, index, "number")
    }
}

impl FromLua for f32 {
    fn from_lua(rt: &Runtime, index: c_int) -> Result<Self> {
        f64::from_lua(rt, index).map(|n| n as f32)
    }
}

impl FromLua for String {
    fn from_lua(rt: &Runtime, index: c_int) -> Result<Self> {
        let state = rt.as_raw();
        let kind = ValueKind::from_raw(unsafe { lua_type(state, index) });
        // Checked by tag: lua_tolstring would stringify numbers in place.
        if kind != ValueKind::String {
            return Err(mismatch("string", kind));
        }
        let mut len = 0usize;
        let ptr = unsafe { lua_tolstring(state, index, &mut len) };
        if ptr.is_null() || len == 0 {
            return Ok(String::new());
        }
        let bytes = unsafe { std::slice::from_raw_parts(ptr as *const u8, len) };
        String::from_utf8(bytes.to_vec()).map_err(|_| Error::Conversion {
            expected: "UTF-8 string",
            got: "binary string",
        })
    }
}
