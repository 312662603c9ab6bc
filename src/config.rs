use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const NOTES_DIR: &str = "NOTES_DIR";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 8080;
    pub const NOTES_DIR: &str = "./notes";
}

/// Returns the absolute path to the crate directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it resolves the same way
/// regardless of the working directory at runtime.
pub fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the static assets directory (the upload form lives here)
pub fn static_dir() -> PathBuf {
    crate_dir().join("static")
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub notes_dir: String,
}

impl Config {
    /// Build the config from the environment, falling back to defaults.
    /// A malformed PORT is logged and replaced with the default.
    pub fn from_env() -> Self {
        let host = env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string());

        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "[CONFIG] Invalid {} value {:?}, using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        let notes_dir =
            env::var(env_vars::NOTES_DIR).unwrap_or_else(|_| defaults::NOTES_DIR.to_string());

        Self {
            host,
            port,
            notes_dir,
        }
    }
}
