pub(crate) const DEV_SERVER_URL: &str = "http://localhost:5173/";
pub(crate) const BUNDLED_INDEX_FILE: &str = "index.html";
pub(crate) const SETTINGS_PAGE: &str = "settings.html";

pub(crate) const DESKTOP_LOG_FILE: &str = "dreamspinner.log";
pub(crate) const STATE_FILE: &str = "dream_state.json";

pub(crate) const MODE_ENV: &str = "DREAMSPINNER_MODE";
pub(crate) const ROOT_ENV: &str = "DREAMSPINNER_ROOT";
pub(crate) const LOG_FILE_ENV: &str = "DREAMSPINNER_LOG_FILE";

pub(crate) const WINDOW_LABEL_PREFIX: &str = "dream";
