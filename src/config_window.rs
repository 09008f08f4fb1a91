use tauri::{WebviewUrl, WebviewWindowBuilder};

use crate::{append_desktop_log, SETTINGS_PAGE};

/// The `/c` command: a single visible settings window instead of the
/// fullscreen dream session. Closing it ends the process.
pub(crate) fn run() {
    append_desktop_log("opening settings window");

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            crate::host_bridge_commands::dream_bridge_log
        ])
        .setup(|app| {
            WebviewWindowBuilder::new(app, "settings", WebviewUrl::App(SETTINGS_PAGE.into()))
                .title("DreamSpinner Settings")
                .inner_size(640.0, 480.0)
                .build()?;
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while building tauri application");
}
