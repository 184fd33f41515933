//! # Source Repository Trait
//!
//! ローカルのアップロード元ファイルの列挙を抽象化

use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// ソースリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// フォルダ直下のファイルを列挙する（サブフォルダは辿らない）
    ///
    /// # Errors
    ///
    /// フォルダが読めない場合にI/Oエラーを返す
    async fn list_files(&self, folder: &Path) -> std::io::Result<Vec<PathBuf>>;
}
