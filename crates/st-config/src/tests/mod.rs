
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every override the loader reads; cleared so the host environment can't leak in.
const OVERRIDE_VARS: [&str; 7] = [
    "ST_BACKEND",
    "ST_IDENTITY_API_KEY",
    "ST_IDENTITY_AUTH_URL",
    "ST_DATABASE_URL",
    "ST_LOG_LEVEL",
    "ST_LOG_COLORED",
    "ST_LOG_FILE",
];

/// Create a temp config directory, point ST_CONFIG_DIR at it and clear overrides
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "ST_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(OVERRIDE_VARS.iter().map(|key| EnvGuard::remove(*key)));
    (temp, guards)
}

/// Write `contents` as config.toml inside the temp config directory
pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
