use std::ffi::c_int;

use mlua_sys::*;

/// Kind tag for a Lua value, as reported by `lua_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An invalid (non-existent) stack slot.
    None,
    Nil,
    Boolean,
    LightUserData,
    Number,
    String,
    Table,
    Function,
    UserData,
    Thread,
}

impl ValueKind {
    pub(crate) fn from_raw(tag: c_int) -> Self {
        match tag {
            LUA_TNIL => ValueKind::Nil,
            LUA_TBOOLEAN => ValueKind::Boolean,
            LUA_TLIGHTUSERDATA => ValueKind::LightUserData,
            LUA_TNUMBER => ValueKind::Number,
            LUA_TSTRING => ValueKind::String,
            LUA_TTABLE => ValueKind::Table,
            LUA_TFUNCTION => ValueKind::Function,
            LUA_TUSERDATA => ValueKind::UserData,
            LUA_TTHREAD => ValueKind::Thread,
            _ => ValueKind::None,
        }
    }

    /// The name Lua's own `type()` would give this kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::None => "no value",
            ValueKind::Nil => "nil",
            ValueKind::Boolean => "boolean",
            ValueKind::LightUserData | ValueKind::UserData => "userdata",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Table => "table",
            ValueKind::Function => "function",
            ValueKind::Thread => "thread",
        }
    }

    pub fn is_nil(self) -> bool {
        matches!(self, ValueKind::Nil | ValueKind::None)
    }
}
