use std::ffi::OsStr;
use std::path::{Component, Path};

/// Info string for the code fence wrapping a catalogued file.
pub fn get_language_tag(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "tsx" => "tsx",
        _ => "typescript",
    }
}

/// Renders a path with `/` separators regardless of platform.
pub fn to_posix(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Path of `path` relative to `base`, `/`-separated. Falls back to the full path
/// when `path` lies outside `base`.
pub fn display_path(path: &Path, base: &Path) -> String {
    to_posix(path.strip_prefix(base).unwrap_or(path))
}
