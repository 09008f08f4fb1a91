use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DESKTOP_LOG_FILE, LOG_FILE_ENV, ROOT_ENV};

/// Where the desktop log lands: explicit env override first, then the
/// configured root, then next to the executable, then the temp dir.
pub(crate) fn resolve_desktop_log_path() -> PathBuf {
    if let Ok(path) = env::var(LOG_FILE_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Ok(root) = env::var(ROOT_ENV) {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed).join(DESKTOP_LOG_FILE);
        }
    }

    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return exe_dir.join(DESKTOP_LOG_FILE);
    }

    env::temp_dir().join(DESKTOP_LOG_FILE)
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

/// Timestamped diagnostic line, mirrored to stderr. A broken log file must
/// never take the screensaver down, so write failures are swallowed.
pub(crate) fn append_desktop_log(message: &str) {
    let line = format!(
        "[{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        message
    );
    eprintln!("{line}");
    let _ = append_line(&resolve_desktop_log_path(), &line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_line_creates_file_and_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_path = dir.path().join("logs").join("test.log");

        append_line(&log_path, "first").expect("first append");
        append_line(&log_path, "second").expect("second append");

        let contents = std::fs::read_to_string(&log_path).expect("read log");
        assert_eq!(contents, "first\nsecond\n");
    }
}
