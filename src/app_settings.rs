use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{append_desktop_log, startup_mode::RunMode, ROOT_ENV, STATE_FILE};

/// Persisted knobs a user can flip between runs by editing the state file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct DreamSettings {
    /// Blocks quitting on mouse, for debug purposes.
    pub(crate) allow_quit: bool,
    /// Optional run mode override; the env var still wins over this.
    pub(crate) mode: Option<RunMode>,
}

impl Default for DreamSettings {
    fn default() -> Self {
        Self {
            allow_quit: true,
            mode: None,
        }
    }
}

/// State file location: the configured root when set, otherwise next to the
/// executable.
pub(crate) fn default_state_path() -> Option<PathBuf> {
    if let Ok(root) = env::var(ROOT_ENV) {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed).join(STATE_FILE));
        }
    }

    env::current_exe()
        .ok()?
        .parent()
        .map(|dir| dir.join(STATE_FILE))
}

/// Reads settings tolerantly: a missing or unreadable file and garbage
/// content all fall back to defaults. A screensaver should never refuse to
/// start over its own state file.
pub(crate) fn read_settings(state_path: Option<&Path>) -> DreamSettings {
    let Some(path) = state_path else {
        return DreamSettings::default();
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return DreamSettings::default();
        }
        Err(error) => {
            append_desktop_log(&format!(
                "failed to read settings {}: {}. using defaults",
                path.display(),
                error
            ));
            return DreamSettings::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(error) => {
            append_desktop_log(&format!(
                "failed to parse settings {}: {}. using defaults",
                path.display(),
                error
            ));
            DreamSettings::default()
        }
    }
}

pub(crate) fn write_settings(
    settings: &DreamSettings,
    state_path: Option<&Path>,
) -> Result<(), String> {
    let Some(path) = state_path else {
        append_desktop_log("settings path is unavailable; skipping persistence");
        return Ok(());
    };

    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create settings directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let serialized = serde_json::to_string_pretty(settings)
        .map_err(|error| format!("Failed to serialize settings: {error}"))?;
    fs::write(path, serialized)
        .map_err(|error| format!("Failed to write settings {}: {}", path.display(), error))
}
