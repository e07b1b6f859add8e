//! Writing documents to disk.

use crate::document::Documents;
use crate::error::{Error, ErrorKind, Result};
use exn::ResultExt;
use serde::Serialize;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::instrument;

/// Destination of each generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub chapters: PathBuf,
    pub verses: PathBuf,
    pub commentary: PathBuf,
}

fn map_io_error(e: IoError, path: &Path) -> Error {
    let kind = match e.kind() {
        IoErrorKind::PermissionDenied => ErrorKind::PermissionDenied(path.to_path_buf()),
        _ => ErrorKind::Io(path.to_path_buf()),
    };
    exn::Exn::from(e).raise(kind)
}

/// Serialize `value` as JSON and write it to `path`, replacing any existing
/// file. Parent directories are created as needed.
///
/// Returns the number of bytes written.
#[instrument(level = "debug", skip(value))]
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<usize> {
    let encoded = if pretty { serde_json::to_vec_pretty(value) } else { serde_json::to_vec(value) };
    let data = encoded.or_raise(|| ErrorKind::Serialize(path.to_path_buf()))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await.map_err(|e| map_io_error(e, parent))?;
    }
    fs::write(path, &data).await.map_err(|e| map_io_error(e, path))?;
    tracing::info!(path = %path.display(), bytes = data.len(), "Wrote asset");
    Ok(data.len())
}

impl Documents {
    /// Write all three documents, one file after another.
    pub async fn write(&self, paths: &OutputPaths, pretty: bool) -> Result<()> {
        write_json(&paths.chapters, &self.chapters, pretty).await?;
        write_json(&paths.verses, &self.verses, pretty).await?;
        write_json(&paths.commentary, &self.commentary, pretty).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_creates_directories_and_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested/assets/data.json");
        write_json(&path, &BTreeMap::from([("a", 1)]), false).await.unwrap();
        let bytes = write_json(&path, &vec![1, 2], false).await.unwrap();
        assert_eq!(bytes, 5);
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "[1,2]");
    }

    #[tokio::test]
    async fn test_pretty_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pretty.json");
        write_json(&path, &vec!["ال"], true).await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "[\n  \"ال\"\n]");
    }

    #[tokio::test]
    async fn test_parent_is_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        tokio::fs::write(&blocker, b"").await.unwrap();
        let path = blocker.join("data.json");
        let err = write_json(&path, &1, false).await.unwrap_err();
        assert_eq!(*err, ErrorKind::Io(blocker));
    }
}
