use crate::fence::calculate_fence;
use crate::utils::get_language_tag;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DOCUMENT_TITLE: &str = "# Source Catalog (TypeScript)";

/// A collected file ready to be rendered into the catalog.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub path: PathBuf,
    /// Heading text: path relative to the project root, `/`-separated.
    pub display_path: String,
    pub contents: String,
}

impl CatalogFile {
    /// Reads `path` fully, replacing invalid UTF-8 rather than failing on it.
    pub async fn load(path: PathBuf, display_path: String) -> Result<Self> {
        let bytes = fs::read(&path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let contents = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                debug!("Invalid UTF-8 in {}, decoding lossily", display_path);
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        Ok(Self {
            path,
            display_path,
            contents,
        })
    }
}

/// In-memory Markdown catalog. Everything is buffered; [`write_document`]
/// puts it on disk in one call.
pub struct CatalogDocument {
    text: String,
}

impl CatalogDocument {
    /// Starts a document with the title and generation timestamp.
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        let mut text = String::new();
        text.push_str(DOCUMENT_TITLE);
        text.push_str("\n\n");
        text.push_str(&format!(
            "Generated on {}\n\n",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
        Self { text }
    }

    /// Appends the directory tree section for the directory called `root_name`.
    pub fn push_tree(&mut self, root_name: &str, lines: &[String]) {
        self.text
            .push_str(&format!("## Directory structure ({root_name})\n\n```\n"));
        for line in lines {
            self.text.push_str(line);
            self.text.push('\n');
        }
        self.text.push_str("```\n\n## Files\n\n");
    }

    /// Appends one file section, fenced so the file's own backticks stay inert.
    pub fn push_file(&mut self, file: &CatalogFile) {
        let fence = calculate_fence(&file.contents);
        let lang = get_language_tag(&file.path);

        self.text
            .push_str(&format!("### {}\n\n{fence} {lang}\n", file.display_path));
        self.text.push_str(&file.contents);
        if !file.contents.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(&format!("{fence}\n\n"));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Replaces `output_path` with the rendered document in a single write.
pub async fn write_document(output_path: &Path, document: CatalogDocument) -> Result<()> {
    fs::write(output_path, document.into_string())
        .await
        .with_context(|| format!("Failed to write output: {}", output_path.display()))
}
