//! Environment Defaults Module
//!
//! Resolves settings that fall back to environment variables.

use std::env;
use std::path::PathBuf;

use crate::config::DEFAULT_PATH;

/// Environment variable naming the envelope file
pub const PATH_ENV_VAR: &str = "SCALAR_PATH";

/// Determine the envelope path: explicit flag, then `SCALAR_PATH`, then the default
pub fn determine_path(cli_path: Option<PathBuf>) -> PathBuf {
    resolve_path(cli_path, env::var(PATH_ENV_VAR).ok())
}

/// Precedence rule behind [`determine_path`], with the environment value passed in
pub fn resolve_path(cli_path: Option<PathBuf>, env_path: Option<String>) -> PathBuf {
    if let Some(path) = cli_path {
        return path;
    }
    match env_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_PATH),
    }
}
