use mlua_sys::*;

/// RAII guard over the Lua stack height.
///
/// Records the stack top on creation and restores it on drop, so temporary
/// slots (a fetched global, an error object) are released on every exit path.
pub(crate) struct StackGuard {
    state: *mut lua_State,
    top: i32,
}

impl StackGuard {
    pub(crate) fn new(state: *mut lua_State) -> Self {
        let top = unsafe { lua_gettop(state) };
        StackGuard { state, top }
    }
}

impl Drop for StackGuard {
    fn drop(&mut self) {
        unsafe { lua_settop(self.state, self.top) }
    }
}
