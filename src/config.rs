/// Options applied when a [`Runtime`](crate::Runtime) is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Open the Lua standard libraries (`print`, `string`, `math`, ...).
    pub open_libs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { open_libs: true }
    }
}

impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }
}

/// Builder for [`RuntimeConfig`].
///
/// ```rust
/// use luahost::RuntimeConfig;
///
/// let config = RuntimeConfig::builder().open_libs(false).build();
/// assert!(!config.open_libs);
/// ```
#[derive(Debug, Default)]
pub struct RuntimeConfigBuilder {
    config: RuntimeConfig,
}

impl RuntimeConfigBuilder {
    pub fn open_libs(mut self, open: bool) -> Self {
        self.config.open_libs = open;
        self
    }

    pub fn build(self) -> RuntimeConfig {
        self.config
    }
}
