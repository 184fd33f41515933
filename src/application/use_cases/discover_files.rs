//! # Discover Files Use Case
//!
//! アップロード対象ファイル発見ユースケース

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::file_task::FileTask;
use crate::domain::errors::UploadError;
use crate::domain::repositories::source_repository::SourceRepository;

/// ファイル発見ユースケース
///
/// ローカルフォルダ直下のファイルからアップロードタスクを作成する
pub struct DiscoverFilesUseCase<R: SourceRepository> {
    source_repository: Arc<R>,
}

impl<R: SourceRepository> DiscoverFilesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source_repository` - ソースリポジトリ
    pub fn new(source_repository: Arc<R>) -> Self {
        Self { source_repository }
    }

    /// アップロードタスクを作成する
    ///
    /// # Returns
    ///
    /// ファイル名順に並んだタスクのリスト
    ///
    /// # Errors
    ///
    /// フォルダが読めない場合は `SourceRead`、ファイルが1つもない場合は
    /// `EmptySource` を返す。どちらも実行全体を中止する
    pub async fn execute(&self, local_folder: &Path) -> Result<Vec<FileTask>, UploadError> {
        let files = self
            .source_repository
            .list_files(local_folder)
            .await
            .map_err(|source| UploadError::SourceRead {
                path: local_folder.to_path_buf(),
                source,
            })?;

        let mut tasks: Vec<FileTask> = files.iter().filter_map(FileTask::from_path).collect();

        if tasks.is_empty() {
            return Err(UploadError::EmptySource(local_folder.to_path_buf()));
        }

        tasks.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(tasks)
    }
}
