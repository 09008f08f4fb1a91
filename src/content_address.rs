use tauri::{AppHandle, WebviewUrl};
use url::Url;

use crate::{startup_mode::RunMode, BUNDLED_INDEX_FILE, DEV_SERVER_URL};

/// The one address every dream window loads.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ContentAddress {
    DevServer(Url),
    Bundled(&'static str),
}

impl ContentAddress {
    pub(crate) fn to_webview_url(&self) -> WebviewUrl {
        match self {
            ContentAddress::DevServer(url) => WebviewUrl::External(url.clone()),
            ContentAddress::Bundled(path) => WebviewUrl::App((*path).into()),
        }
    }
}

pub(crate) fn resolve_content_address(mode: RunMode) -> ContentAddress {
    match mode {
        RunMode::Development => ContentAddress::DevServer(
            Url::parse(DEV_SERVER_URL).expect("dev server URL constant must parse"),
        ),
        RunMode::Release => ContentAddress::Bundled(BUNDLED_INDEX_FILE),
    }
}

/// Release mode is useless without the bundled front-end; catch that at
/// startup instead of showing N black windows.
pub(crate) fn verify_bundled_content(app_handle: &AppHandle) -> Result<(), String> {
    let asset_path = format!("/{BUNDLED_INDEX_FILE}");
    if app_handle.asset_resolver().get(asset_path.clone()).is_none() {
        return Err(format!("Bundled front-end is missing: {asset_path}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_resolves_to_loopback_dev_server() {
        let address = resolve_content_address(RunMode::Development);
        match address {
            ContentAddress::DevServer(url) => {
                assert_eq!(url.host_str(), Some("localhost"));
                assert_eq!(url.port(), Some(5173));
            }
            other => panic!("expected dev server address, got {other:?}"),
        }
    }

    #[test]
    fn release_resolves_to_bundled_index() {
        let address = resolve_content_address(RunMode::Release);
        assert_eq!(address, ContentAddress::Bundled("index.html"));
    }

    #[test]
    fn modes_never_share_an_address() {
        assert_ne!(
            resolve_content_address(RunMode::Development),
            resolve_content_address(RunMode::Release)
        );
    }
}
