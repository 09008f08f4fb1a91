use serde::{Deserialize, Serialize};

/// Development loads the live front-end from a local dev server, Release
/// loads the bundled assets. Exactly one is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RunMode {
    Development,
    Release,
}

impl RunMode {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Release => "release",
        }
    }
}

pub(crate) fn parse_run_mode(raw: &str) -> Result<RunMode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "development" => Ok(RunMode::Development),
        "release" => Ok(RunMode::Release),
        other => Err(format!(
            "Unrecognized run mode '{other}', expected 'development' or 'release'."
        )),
    }
}

pub(crate) fn default_run_mode() -> RunMode {
    if cfg!(debug_assertions) {
        RunMode::Development
    } else {
        RunMode::Release
    }
}

/// Precedence: env override, then the cached settings file, then the build
/// default. A bad env value is a configuration error, never a fallback.
pub(crate) fn resolve_run_mode(
    env_override: Option<&str>,
    cached: Option<RunMode>,
) -> Result<RunMode, String> {
    if let Some(raw) = env_override {
        return parse_run_mode(raw);
    }
    if let Some(mode) = cached {
        return Ok(mode);
    }
    Ok(default_run_mode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_mode_accepts_both_modes_case_insensitively() {
        assert_eq!(parse_run_mode("development"), Ok(RunMode::Development));
        assert_eq!(parse_run_mode(" Release "), Ok(RunMode::Release));
        assert_eq!(parse_run_mode("DEVELOPMENT"), Ok(RunMode::Development));
    }

    #[test]
    fn parse_run_mode_rejects_unknown_values() {
        assert!(parse_run_mode("production").is_err());
        assert!(parse_run_mode("").is_err());
    }

    #[test]
    fn resolve_run_mode_prefers_env_over_cached() {
        let resolved = resolve_run_mode(Some("release"), Some(RunMode::Development));
        assert_eq!(resolved, Ok(RunMode::Release));
    }

    #[test]
    fn resolve_run_mode_uses_cached_when_env_is_absent() {
        let resolved = resolve_run_mode(None, Some(RunMode::Release));
        assert_eq!(resolved, Ok(RunMode::Release));
    }

    #[test]
    fn resolve_run_mode_errors_on_bad_env_even_with_cached_mode() {
        assert!(resolve_run_mode(Some("nope"), Some(RunMode::Release)).is_err());
    }

    #[test]
    fn resolve_run_mode_falls_back_to_build_default() {
        assert_eq!(resolve_run_mode(None, None), Ok(default_run_mode()));
    }
}
