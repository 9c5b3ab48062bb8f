use crate::traits::UiAssetProvider;
use crate::{Error, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// A UI asset provider that reads files directly from a webroot directory.
#[derive(Debug, Clone)]
pub struct DiskFrontend {
    root: PathBuf,
}

impl DiskFrontend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl UiAssetProvider for DiskFrontend {
    async fn get_asset(&self, path: &str) -> Result<(Cow<'static, [u8]>, String)> {
        let relative = Path::new(path);

        // 只允许普通路径段，防止目录穿越
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(Error::AssetNotFound(path.to_string()));
        }

        let content = fs::read(self.root.join(relative))
            .await
            .map_err(|_| Error::AssetNotFound(path.to_string()))?;

        // Guess the MIME type based on the file extension
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok((Cow::Owned(content), mime))
    }
}
