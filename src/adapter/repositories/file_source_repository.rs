//! File Source Repository Implementation
//!
//! SourceRepositoryのファイルシステム実装

use async_trait::async_trait;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::source_repository::SourceRepository;

/// ファイルシステムベースのソースリポジトリ
pub struct FileSourceRepository;

impl FileSourceRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// フォルダ直下の通常ファイルを列挙する（同期処理）
    ///
    /// フォルダ自体が読めない場合のみエラー。リンク切れなど個別エントリの
    /// エラーはパスをそのまま返し、アップロード時にそのファイルだけ失敗させる
    fn list_files_sync(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(e) if e.depth() > 0 => match e.path() {
                    Some(path) => {
                        warn!("Unreadable entry {}: {}", path.display(), e);
                        files.push(path.to_path_buf());
                    }
                    None => return Err(e.into()),
                },
                Err(e) => return Err(e.into()),
            }
        }

        debug!("Listed {} files in {}", files.len(), folder.display());

        Ok(files)
    }
}

#[async_trait]
impl SourceRepository for FileSourceRepository {
    async fn list_files(&self, folder: &Path) -> std::io::Result<Vec<PathBuf>> {
        let folder = folder.to_path_buf();
        tokio::task::spawn_blocking(move || Self::list_files_sync(&folder))
            .await
            .map_err(std::io::Error::other)?
    }
}

impl Default for FileSourceRepository {
    fn default() -> Self {
        Self::new()
    }
}
