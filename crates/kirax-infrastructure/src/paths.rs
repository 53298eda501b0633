//! Unified path management for kirax configuration files.
//!
//! Only the secret file lives on disk. Sessions are never persisted, so
//! there is no data directory.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for kirax.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/kirax/             # Config directory
/// └── secret.json              # API keys
/// ```
pub struct KiraxPaths;

impl KiraxPaths {
    /// Returns the kirax configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/kirax/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("kirax"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to secret.json
    /// - `Err(PathError)`: Could not determine path
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}
