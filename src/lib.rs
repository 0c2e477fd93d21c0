//! # src-catalog Library
//!
//! Snapshots the TypeScript sources of a project into one Markdown file:
//!
//! - a directory tree of `src/`, limited to directories and `.ts`/`.tsx` files
//! - every collected file in its own fenced code block, sorted by path
//!
//! Hidden files and directories are skipped everywhere.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use src_catalog::{Config, run_catalog};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let project_root = std::env::current_dir()?;
//!     let config = Config::for_project(project_root.clone(), project_root.join("src-catalog.md"));
//!
//!     let summary = run_catalog(&config).await?;
//!     println!("{} files", summary.file_count);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod fence;
pub mod filewalker;
pub mod tree;
pub mod utils;
pub mod writer;

pub use cli::Config;
pub use error::CatalogError;
pub use fence::calculate_fence;
pub use filewalker::collect_files;
pub use tree::{TreeNode, render_tree};
pub use writer::{CatalogDocument, CatalogFile};

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::path::{Path, PathBuf};
use utils::{display_path, to_posix};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    pub output_path: PathBuf,
    pub file_count: usize,
}

/// Generate the catalog described by `config` and write it to disk.
pub async fn run_catalog(config: &Config) -> Result<CatalogSummary> {
    let (document, file_count) = build_catalog(config, Utc::now()).await?;

    writer::write_document(&config.output_path, document).await?;
    info!("Wrote: {}", config.output_path.display());

    Ok(CatalogSummary {
        output_path: config.output_path.clone(),
        file_count,
    })
}

/// Builds the catalog text in memory without writing it. Returns the document
/// and the number of files it contains.
pub async fn build_catalog(
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Result<(CatalogDocument, usize)> {
    let root = &config.source_root;
    if !root.is_dir() {
        return Err(CatalogError::MissingRoot(root.clone()).into());
    }

    let mut paths = collect_files(root)?;
    paths.sort_by_cached_key(|p| to_posix(p));
    debug!("Collected {} files under {}", paths.len(), root.display());

    let tree = render_tree(root)?;

    let mut document = CatalogDocument::new(generated_at);
    document.push_tree(&root_label(root), &tree);

    for path in &paths {
        let heading = display_path(path, &config.project_root);
        debug!("Writing file: {}", heading);
        let file = CatalogFile::load(path.clone(), heading).await?;
        document.push_file(&file);
    }

    Ok((document, paths.len()))
}

fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| to_posix(root))
}
