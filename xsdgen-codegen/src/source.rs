//! Schema source discovery and retrieval.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use eyre::Result;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Collect the schema files reachable from a path.
///
/// For a directory, every entry is visited recursively in lexical order,
/// directories included, and the root path itself is appended once more at
/// the end. For a plain file the result is just that path. Downstream
/// consumers skip non-schema entries themselves, so nothing is filtered
/// here.
pub fn schema_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if fs::metadata(path)?.is_dir() {
        walk(path, &mut files)?;
    }
    files.push(path.to_path_buf());
    debug!(path = %path.display(), count = files.len(), "collected schema files");
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    for entry in entries {
        let path = entry.path();
        let is_dir = entry.file_type()?.is_dir();
        files.push(path.clone());
        if is_dir {
            walk(&path, files)?;
        }
    }
    Ok(())
}

/// Create the output directory (and parents) if it does not exist yet.
///
/// The empty path is a no-op, as is a directory that already exists.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    if !path.exists() {
        fs::create_dir_all(path)?;
        debug!(path = %path.display(), "created output directory");
    }
    Ok(())
}

/// Check whether a schema location is a remote URL rather than a local path.
///
/// True only for an absolute URI with a host, so bare file names and
/// relative paths fall through to filesystem handling.
pub fn is_remote(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| url.has_host())
}

/// Fetch a remote schema with a single blocking GET.
///
/// Only a 200 response yields the body; any other status yields an empty
/// body with no error, deferring the failure to the parser downstream.
pub fn fetch_schema(url: &str) -> Result<Vec<u8>> {
    debug!(url, "fetching remote schema");
    let response = reqwest::blocking::get(url)?;
    if response.status() != StatusCode::OK {
        return Ok(Vec::new());
    }
    Ok(response.bytes()?.to_vec())
}
