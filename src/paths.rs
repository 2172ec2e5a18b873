//! Home directory abbreviation.

use std::path::{Path, MAIN_SEPARATOR};

/// Replace a leading home directory in `path` with `~`.
///
/// The home directory is looked up on every call (`$HOME` on Unix).
/// Paths outside it, or any path when no home directory is known, come
/// back unchanged.
pub fn tilde<P: AsRef<Path>>(path: P) -> String {
    let home = dirs::home_dir();
    if home.is_none() {
        tracing::debug!("no home directory, leaving path untouched");
    }
    tilde_with_home(path, home.as_deref())
}

/// [`tilde`] with an explicit home directory.
///
/// The home prefix must end at a separator: with home `/home/oski`, the
/// path `/home/oskar` is not abbreviated. Everything after the prefix is
/// kept byte for byte, trailing separators and `.` segments included.
pub fn tilde_with_home<P: AsRef<Path>>(path: P, home: Option<&Path>) -> String {
    let path = path.as_ref().to_string_lossy();
    let Some(home) = home.map(|h| h.to_string_lossy()) else {
        return path.into_owned();
    };
    let home = home.trim_end_matches(MAIN_SEPARATOR);
    if home.is_empty() {
        return path.into_owned();
    }

    match path.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with(MAIN_SEPARATOR) => format!("~{rest}"),
        _ => path.into_owned(),
    }
}
