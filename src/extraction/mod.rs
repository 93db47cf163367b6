//! Endpoint extraction from frontend service files and backend resource
//! files. Both extractors are pure text scans over one file's content;
//! `collect_endpoints` handles the file reading and repo-relative source
//! attribution shared by the two sides.

pub mod backend;
pub mod frontend;
pub mod paths;

use crate::core::EndpointSet;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Run a per-file extractor over every file, tagging endpoints with the
/// file's path relative to the repository root.
pub fn collect_endpoints<F>(files: &[PathBuf], repo: &Path, extract: F) -> Result<EndpointSet>
where
    F: Fn(&str, &Path) -> EndpointSet,
{
    let mut endpoints = EndpointSet::new();
    for file in files {
        let content = fs::read_to_string(file)?;
        let source = file.strip_prefix(repo).unwrap_or(file);
        endpoints.extend(extract(&content, source));
    }
    Ok(endpoints)
}
