use tauri::{window::Monitor, AppHandle, Manager, Runtime, WebviewWindowBuilder};

use crate::{
    app_types::DreamState,
    content_address::{self, ContentAddress},
    WINDOW_LABEL_PREFIX,
};

pub(crate) fn window_label(index: usize) -> String {
    format!("{WINDOW_LABEL_PREFIX}{index}")
}

/// Monitors report physical coordinates; Tauri positions windows in logical
/// ones, so divide out the scale factor.
pub(crate) fn monitor_window_position(
    physical_x: i32,
    physical_y: i32,
    scale_factor: f64,
) -> (f64, f64) {
    (
        f64::from(physical_x) / scale_factor,
        f64::from(physical_y) / scale_factor,
    )
}

/// One fullscreen window per detected monitor, created hidden so nothing
/// flashes before the page is ready. Zero monitors is not an error; a window
/// that fails to build is logged and skipped so the remaining monitors still
/// get covered.
pub(crate) fn create_windows<R, F>(
    app_handle: &AppHandle<R>,
    state: &DreamState,
    log: F,
) -> Result<(), String>
where
    R: Runtime,
    F: Fn(&str),
{
    let monitors = app_handle
        .available_monitors()
        .map_err(|error| format!("Failed to enumerate monitors: {error}"))?;
    if monitors.is_empty() {
        log("no monitors detected; nothing to cover");
        return Ok(());
    }

    let address = content_address::resolve_content_address(state.config.mode);
    for (index, monitor) in monitors.iter().enumerate() {
        let label = window_label(index);
        match build_dream_window(app_handle, &label, monitor, &address) {
            Ok(()) => {
                state.track_window(label.clone());
                log(&format!(
                    "created window '{label}' on monitor {:?}",
                    monitor.name()
                ));
            }
            Err(error) => {
                log(&format!("failed to create window '{label}': {error}"));
            }
        }
    }
    Ok(())
}

fn build_dream_window<R: Runtime>(
    app_handle: &AppHandle<R>,
    label: &str,
    monitor: &Monitor,
    address: &ContentAddress,
) -> Result<(), String> {
    let (x, y) = monitor_window_position(
        monitor.position().x,
        monitor.position().y,
        monitor.scale_factor(),
    );
    let window = WebviewWindowBuilder::new(app_handle, label, address.to_webview_url())
        .title("DreamSpinner")
        .position(x, y)
        .fullscreen(true)
        .background_color(tauri::window::Color(0, 0, 0, 255))
        .visible(false)
        .build()
        .map_err(|error| format!("Failed to build webview window: {error}"))?;
    // Re-assert fullscreen after the window landed on its monitor; some
    // platforms apply the builder flag against the primary monitor.
    window
        .set_fullscreen(true)
        .map_err(|error| format!("Failed to set fullscreen: {error}"))?;
    Ok(())
}

/// Hidden until its page finished loading, then shown.
pub(crate) fn reveal_window<R, F>(window: &tauri::Window<R>, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    match window.show() {
        Ok(()) => log(&format!("window '{}' revealed", window.label())),
        Err(error) => log(&format!(
            "failed to reveal window '{}': {error}",
            window.label()
        )),
    }
}

/// Destroys every tracked window and clears the collection. Destroying the
/// last window ends the event loop, which is how the process exits.
/// Idempotent: with nothing tracked this is a no-op.
pub(crate) fn stop<R, F>(app_handle: &AppHandle<R>, state: &DreamState, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    let labels = state.drain_windows();
    if labels.is_empty() {
        log("stop requested with no windows to destroy");
        return;
    }

    for label in labels {
        match app_handle.get_webview_window(&label) {
            Some(window) => {
                if let Err(error) = window.destroy() {
                    log(&format!("failed to destroy window '{label}': {error}"));
                    // Still alive, so keep it tracked for the next stop.
                    state.track_window(label);
                }
            }
            None => log(&format!("window '{label}' is already gone")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_labels_follow_monitor_order() {
        assert_eq!(window_label(0), "dream0");
        assert_eq!(window_label(2), "dream2");
    }

    #[test]
    fn position_divides_out_the_scale_factor() {
        assert_eq!(monitor_window_position(3840, 0, 2.0), (1920.0, 0.0));
        assert_eq!(monitor_window_position(-1920, 1080, 1.0), (-1920.0, 1080.0));
    }

    #[test]
    fn stop_clears_tracking_and_stays_idempotent() {
        use crate::{
            app_types::{DreamConfig, DreamState},
            startup_mode::RunMode,
        };

        let app = tauri::test::mock_builder()
            .build(tauri::test::mock_context(tauri::test::noop_assets()))
            .expect("build mock app");
        app.manage(DreamState::new(DreamConfig {
            mode: RunMode::Release,
            allow_quit: true,
        }));
        let state = app.state::<DreamState>();
        state.track_window(window_label(0));
        state.track_window(window_label(1));

        stop(app.handle(), &state, |_| {});
        assert_eq!(state.window_count(), 0);

        stop(app.handle(), &state, |_| {});
        assert_eq!(state.window_count(), 0);
    }
}
