use std::sync::Mutex;

use crate::startup_mode::RunMode;

/// Explicit configuration for one run. Passed in at construction so tests
/// can vary it per instance instead of reaching for globals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DreamConfig {
    pub(crate) mode: RunMode,
    /// Blocks quitting on mouse, for debug purposes.
    pub(crate) allow_quit: bool,
}

/// Managed state shared across the event loop: the run configuration and the
/// labels of every dream window still alive.
#[derive(Debug)]
pub(crate) struct DreamState {
    pub(crate) config: DreamConfig,
    windows: Mutex<Vec<String>>,
}

impl DreamState {
    pub(crate) fn new(config: DreamConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn track_window(&self, label: String) {
        if let Ok(mut windows) = self.windows.lock() {
            windows.push(label);
        }
    }

    /// Takes every tracked label, leaving the collection empty.
    pub(crate) fn drain_windows(&self) -> Vec<String> {
        self.windows
            .lock()
            .map(|mut windows| std::mem::take(&mut *windows))
            .unwrap_or_default()
    }

    pub(crate) fn is_tracked(&self, label: &str) -> bool {
        self.windows
            .lock()
            .map(|windows| windows.iter().any(|tracked| tracked == label))
            .unwrap_or(false)
    }

    pub(crate) fn window_count(&self) -> usize {
        self.windows.lock().map(|windows| windows.len()).unwrap_or(0)
    }
}

/// Snapshot handed to the front-end over the bridge.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DreamBridgeState {
    pub(crate) mode: &'static str,
    pub(crate) allow_quit: bool,
    pub(crate) window_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> DreamState {
        DreamState::new(DreamConfig {
            mode: RunMode::Release,
            allow_quit: true,
        })
    }

    #[test]
    fn tracked_windows_are_drained_once() {
        let state = test_state();
        state.track_window("dream0".to_string());
        state.track_window("dream1".to_string());
        assert_eq!(state.window_count(), 2);
        assert!(state.is_tracked("dream1"));

        let drained = state.drain_windows();
        assert_eq!(drained, vec!["dream0".to_string(), "dream1".to_string()]);
        assert_eq!(state.window_count(), 0);
        assert!(state.drain_windows().is_empty());
    }

    #[test]
    fn untracked_labels_are_not_reported_as_tracked() {
        let state = test_state();
        state.track_window("dream0".to_string());
        assert!(!state.is_tracked("settings"));
    }

    #[test]
    fn bridge_state_serializes_camel_case() {
        let snapshot = DreamBridgeState {
            mode: "release",
            allow_quit: false,
            window_count: 2,
        };
        let json = serde_json::to_value(&snapshot).expect("serialize bridge state");
        assert_eq!(json["mode"], "release");
        assert_eq!(json["allowQuit"], false);
        assert_eq!(json["windowCount"], 2);
    }
}
