//! Read-only database connections.

use exn::ResultExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// A read-only handle on one source database.
///
/// Every source is opened, fully drained and closed before the next one is
/// opened, so a single connection is all that is ever needed.
#[derive(Debug)]
pub struct Database {
    pool: SqlitePool,
    path: PathBuf,
}

impl Database {
    /// Open an existing database read-only.
    ///
    /// Returns [`ErrorKind::NotFound`] rather than creating an empty database
    /// when the file is missing.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        let options = SqliteConnectOptions::new().filename(path).read_only(true).create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(Self { pool, path: path.to_path_buf() })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection. The handle cannot be used afterwards.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!(path = %self.path.display(), "Closed source database");
    }
}
