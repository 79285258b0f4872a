use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use models::Employee;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, warn};

use crate::errors::StoreError;
use crate::storage::EmployeeStore;

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// JSON file-backed employee store.
///
/// The file holds a pretty-printed JSON array in insertion order. Writes go to a
/// sibling temp file which is then renamed over the target, so readers see either
/// the previous snapshot or the new one, never a partial file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// The file is not touched until the first `write`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("employees.json");
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        self.file_path
            .with_file_name(format!(".{}.tmp.{}.{}", name, std::process::id(), seq))
    }
}

#[async_trait]
impl EmployeeStore for JsonFileStore {
    async fn read(&self) -> Result<Vec<Employee>, StoreError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "store file missing; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::ReadFailed(format!("{}: {}", self.file_path.display(), e))),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.file_path.display(), e)))
    }

    async fn write(&self, employees: &[Employee]) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::WriteFailed(format!("{}: {}", self.file_path.display(), e));

        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let mut data = serde_json::to_vec_pretty(employees)
            .map_err(|e| StoreError::WriteFailed(format!("serialize employees: {}", e)))?;
        data.push(b'\n');

        let tmp = self.tmp_path();
        let staged = async {
            let mut f = fs::File::create(&tmp).await?;
            f.write_all(&data).await?;
            f.sync_all().await?;
            fs::rename(&tmp, &self.file_path).await
        }
        .await;

        if let Err(e) = staged {
            if let Err(cleanup) = fs::remove_file(&tmp).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(path = %tmp.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(write_err(e));
        }
        debug!(path = %self.file_path.display(), count = employees.len(), "store written");
        Ok(())
    }
}
