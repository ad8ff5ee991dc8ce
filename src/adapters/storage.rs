use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::path::Path;

/// Writes to the local filesystem. Paths are relative to the working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    create_dirs: bool,
}

impl LocalStorage {
    pub fn new(create_dirs: bool) -> Self {
        Self { create_dirs }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(path);
        let write_error = |source| EtlError::WriteError {
            path: path.to_string(),
            source,
        };

        if self.create_dirs {
            if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tracing::debug!("Creating directory {}", parent.display());
                tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
            }
        }

        // 覆寫既有檔案
        tokio::fs::write(full_path, data).await.map_err(write_error)?;
        Ok(())
    }
}
