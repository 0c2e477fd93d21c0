use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};
use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extensions catalogued by the tool, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Collects every accepted source file under `root`, depth first.
///
/// Hidden entries are skipped together with everything beneath them. Links are
/// not followed and symlinked files are left out, so the result lines up with
/// what [`crate::tree::render_tree`] draws for the same root. Any walk error is
/// fatal.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);

    // Only the dot-name rule applies; no .gitignore or .ignore semantics.
    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    let mut files = Vec::new();

    for result in builder.build() {
        let entry =
            result.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && has_accepted_extension(entry.path()) {
            debug!("Collected: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Determines if a file/folder is hidden (starts with a dot)
fn is_hidden(entry: &DirEntry) -> bool {
    is_hidden_name(entry.file_name())
}

pub(crate) fn is_hidden_name(name: &OsStr) -> bool {
    // Raw bytes, so names that are not valid UTF-8 are still recognised.
    name.as_encoded_bytes().starts_with(b".")
}

pub(crate) fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}
