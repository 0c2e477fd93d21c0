use std::path::PathBuf;
use thiserror::Error;

/// Failures the binary reports differently from plain I/O errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("source directory not found: {}", .0.display())]
    MissingRoot(PathBuf),
}
