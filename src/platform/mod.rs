// Guidebook platform paths
// Config: settings.json. Data: the guide book database.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "guidebook";

fn home_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let home = env::var("USERPROFILE");
    #[cfg(not(target_os = "windows"))]
    let home = env::var("HOME");
    PathBuf::from(home.unwrap_or_else(|_| env::temp_dir().to_string_lossy().to_string()))
}

/// Directory that holds `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/guidebook`, else `~/.config/guidebook`
/// - **macOS**: `~/Library/Application Support/guidebook`
/// - **Windows**: `%APPDATA%/guidebook`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
            .join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        xdg_dir("XDG_CONFIG_HOME", &[".config"])
    }
}

/// Directory that holds the guide book database.
///
/// - **Linux**: `$XDG_DATA_HOME/guidebook`, else `~/.local/share/guidebook`
/// - **macOS** / **Windows**: same as the config directory
pub fn get_data_dir() -> PathBuf {
    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        get_config_dir()
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"])
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join(APP_DIR),
        _ => fallback
            .iter()
            .fold(home_dir(), |path, part| path.join(part))
            .join(APP_DIR),
    }
}
