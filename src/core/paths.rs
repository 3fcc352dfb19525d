use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base renamer config directory (`~/.config/renamer/`, `%APPDATA%\renamer` on Windows).
pub fn renamer() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("renamer"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("renamer"))
    }
}

/// Global renamer.json config file path
pub fn renamer_json() -> Result<PathBuf> {
    Ok(renamer()?.join("renamer.json"))
}
