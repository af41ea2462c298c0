//! Environment store used to publish run-wide values.
//!
//! Keys are namespaced under [`ENV_PREFIX`], so `set("LOG_FILE", ..)` writes
//! `RAPIDS_USER_TOOLS_LOG_FILE`. The store is passed explicitly to the code
//! that needs it rather than reached through a global.

use std::collections::HashMap;

/// Prefix shared by all tool-owned environment variables.
pub const ENV_PREFIX: &str = "RAPIDS_USER_TOOLS";

/// Unique identifier of the current run.
pub const KEY_UUID: &str = "UUID";
/// Tools home directory (logs, cached configuration).
pub const KEY_HOME: &str = "HOME";
/// Log file of the current run.
pub const KEY_LOG_FILE: &str = "LOG_FILE";
/// Enables debug logging when set to a truthy value.
pub const KEY_LOG_DEBUG: &str = "LOG_DEBUG";

/// Full variable name for a tool key.
pub fn namespaced_key(key: &str) -> String {
    format!("{}_{}", ENV_PREFIX, key)
}

/// Interpret an environment value as a flag ("1", "true", "yes", "on").
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Key-value store backing tool environment variables.
pub trait EnvStore {
    /// Read a variable by its raw name, e.g. `HOME`.
    fn sys_var(&self, name: &str) -> Option<String>;

    /// Write a tool-namespaced variable.
    fn set(&mut self, key: &str, value: &str);

    /// Read a tool-namespaced variable.
    fn get(&self, key: &str) -> Option<String> {
        self.sys_var(&namespaced_key(key))
    }

    /// Whether a tool-namespaced flag is set to a truthy value.
    fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| is_truthy(&v))
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn sys_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(namespaced_key(key), value);
    }
}

/// In-memory store, isolated from the process environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw variable such as `HOME`.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvStore for MemoryEnv {
    fn sys_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(namespaced_key(key), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        name: String,
        prev: Option<String>,
    }

    impl EnvVarRestore {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                prev: std::env::var(name).ok(),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            match &self.prev {
                Some(value) => std::env::set_var(&self.name, value),
                None => std::env::remove_var(&self.name),
            }
        }
    }

    #[test]
    fn test_namespaced_key() {
        assert_eq!(namespaced_key(KEY_LOG_FILE), "RAPIDS_USER_TOOLS_LOG_FILE");
    }

    #[test]
    fn test_is_truthy() {
        for value in ["1", "true", "TRUE", "yes", "on", " On "] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["0", "false", "no", "", "off"] {
            assert!(!is_truthy(value), "{value}");
        }
    }

    #[test]
    fn test_memory_env_namespacing() {
        let mut store = MemoryEnv::new().with_var("HOME", "/home/someone");
        store.set(KEY_HOME, "/home/someone/.spark_rapids_tools");

        assert_eq!(store.sys_var("HOME").as_deref(), Some("/home/someone"));
        assert_eq!(
            store.get(KEY_HOME).as_deref(),
            Some("/home/someone/.spark_rapids_tools")
        );
        assert_eq!(
            store.sys_var("RAPIDS_USER_TOOLS_HOME").as_deref(),
            Some("/home/someone/.spark_rapids_tools")
        );
        assert!(MemoryEnv::new().sys_var("HOME").is_none());
    }

    #[test]
    fn test_memory_env_flag() {
        let mut store = MemoryEnv::new();
        assert!(!store.flag(KEY_LOG_DEBUG));
        store.set(KEY_LOG_DEBUG, "true");
        assert!(store.flag(KEY_LOG_DEBUG));
    }

    #[test]
    fn test_process_env_roundtrip() {
        let _env_lock_guard = env_lock().lock().unwrap();
        let _restore = EnvVarRestore::new(&namespaced_key(KEY_UUID));

        let mut store = ProcessEnv;
        store.set(KEY_UUID, "20240101000000_abcdefgh");
        assert_eq!(
            std::env::var("RAPIDS_USER_TOOLS_UUID").unwrap(),
            "20240101000000_abcdefgh"
        );
        assert_eq!(
            store.get(KEY_UUID).as_deref(),
            Some("20240101000000_abcdefgh")
        );
    }
}
