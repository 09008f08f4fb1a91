use tauri::{AppHandle, Manager, Runtime};

use crate::{
    append_desktop_log,
    app_types::{DreamBridgeState, DreamState},
    dream_windows,
};

/// Forwards a front-end message to the desktop log. Never fails.
#[tauri::command]
pub(crate) fn dream_bridge_log(message: String) {
    append_desktop_log(&message);
}

/// The guard behind `dream_bridge_quit`: stops the session only when the
/// configuration allows it. Returns whether stop ran.
pub(crate) fn quit_session<R, F>(app_handle: &AppHandle<R>, state: &DreamState, log: F) -> bool
where
    R: Runtime,
    F: Fn(&str),
{
    if !state.config.allow_quit {
        log("quit requested but allow_quit is off; ignoring");
        return false;
    }

    log("quit requested from content; destroying all windows");
    dream_windows::stop(app_handle, state, log);
    true
}

/// Shuts the whole session down, unless quitting is disabled for debugging.
/// Returns nothing either way; content cannot tell "declined" from "done".
#[tauri::command]
pub(crate) fn dream_bridge_quit(app_handle: AppHandle) {
    let state = app_handle.state::<DreamState>();
    quit_session(&app_handle, &state, append_desktop_log);
}

#[tauri::command]
pub(crate) fn dream_bridge_runtime_state(app_handle: AppHandle) -> DreamBridgeState {
    let state = app_handle.state::<DreamState>();
    DreamBridgeState {
        mode: state.config.mode.as_str(),
        allow_quit: state.config.allow_quit,
        window_count: state.window_count(),
    }
}
