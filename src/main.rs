// Prevents an extra console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_settings;
mod app_types;
mod config_window;
mod content_address;
mod dream_windows;
mod host_bridge_commands;
mod logging;
mod parse_cli;
mod startup_mode;

pub(crate) use app_constants::*;
pub(crate) use logging::append_desktop_log;

use std::env;

use app_types::DreamConfig;
use parse_cli::MainCommand;

fn main() {
    let args: Vec<String> = env::args().collect();
    let parsed = match parse_cli::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("DreamSpinner: {error}");
            std::process::exit(2);
        }
    };

    let config = match resolve_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("DreamSpinner: {error}");
            std::process::exit(2);
        }
    };

    match parsed.command {
        MainCommand::Show => app_runtime::run(config),
        MainCommand::Config => config_window::run(),
        MainCommand::Preview => {
            // Rendering into a foreign preview handle is not supported.
            let handle = parsed.handle.unwrap_or_default();
            append_desktop_log(&format!(
                "preview into handle {handle} requested; not supported"
            ));
        }
    }
}

/// Builds the run configuration: cached settings first, env override on top.
/// Seeds the state file with defaults on first run so users can find it.
fn resolve_config() -> Result<DreamConfig, String> {
    let state_path = app_settings::default_state_path();
    let settings = app_settings::read_settings(state_path.as_deref());
    if let Some(path) = state_path.as_deref() {
        if !path.exists() {
            if let Err(error) = app_settings::write_settings(&settings, Some(path)) {
                append_desktop_log(&format!("failed to seed settings file: {error}"));
            }
        }
    }

    let env_mode = env::var(MODE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let mode = startup_mode::resolve_run_mode(env_mode.as_deref(), settings.mode)?;

    Ok(DreamConfig {
        mode,
        allow_quit: settings.allow_quit,
    })
}
