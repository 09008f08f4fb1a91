use tauri::{webview::PageLoadEvent, Manager, RunEvent};

use crate::{
    append_desktop_log,
    app_types::{DreamConfig, DreamState},
    content_address, dream_windows,
    startup_mode::RunMode,
};

/// Assembles the event loop for a dream session: managed state, the bridge
/// commands, window creation in setup, and the page-load hook that reveals a
/// window once its content is ready. Blocks until every window is gone.
pub(crate) fn run(config: DreamConfig) {
    append_desktop_log(&format!(
        "dream session starting: mode={} allow_quit={}",
        config.mode.as_str(),
        config.allow_quit
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|_app, argv, _cwd| {
            append_desktop_log(&format!("second launch ignored: argv={argv:?}"));
        }))
        .manage(DreamState::new(config))
        .invoke_handler(tauri::generate_handler![
            crate::host_bridge_commands::dream_bridge_log,
            crate::host_bridge_commands::dream_bridge_quit,
            crate::host_bridge_commands::dream_bridge_runtime_state,
        ])
        .on_page_load(|webview, payload| {
            if let PageLoadEvent::Finished = payload.event() {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                let state = webview.app_handle().state::<DreamState>();
                if state.is_tracked(webview.window().label()) {
                    dream_windows::reveal_window(&webview.window(), append_desktop_log);
                }
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();
            if config.mode == RunMode::Release {
                content_address::verify_bundled_content(&app_handle)?;
            }
            let state = app_handle.state::<DreamState>();
            dream_windows::create_windows(&app_handle, &state, append_desktop_log)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::Exit = event {
                append_desktop_log("dream session ended");
            }
        });
}
