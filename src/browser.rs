//! Chrome/Chromium detection.
//!
//! The resume demo renders PDFs through a headless browser. We only probe for
//! one here; a miss is a warning, never a launch blocker.

use std::path::PathBuf;

/// Well-known absolute install locations, checked before PATH.
const KNOWN_PATHS: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/snap/bin/chromium",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
];

/// Executable names resolved through the command search path.
const PATH_NAMES: &[&str] = &["google-chrome", "chromium", "chromium-browser"];

/// Find a usable Chrome/Chromium executable, if any.
pub fn find_browser() -> Option<PathBuf> {
    for path in KNOWN_PATHS {
        let candidate = PathBuf::from(path);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    for name in PATH_NAMES {
        if let Some(found) = search_path(name) {
            return Some(found);
        }
    }
    None
}

fn search_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
