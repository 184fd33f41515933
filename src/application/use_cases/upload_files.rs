//! # Upload Files Use Case
//!
//! ローカルフォルダのファイルを並列数を制限してリモートフォルダへアップロードする

use log::{debug, info};
use std::sync::Arc;
use tokio::fs::File;
use tokio::sync::Semaphore;

use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::discover_files::DiscoverFilesUseCase;
use crate::domain::entities::file_task::FileTask;
use crate::domain::entities::run_summary::RunSummary;
use crate::domain::entities::upload_result::{UploadOutcome, UploadResult};
use crate::domain::errors::UploadError;
use crate::domain::repositories::source_repository::SourceRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::outcome_classifier::OutcomeClassifier;

/// ファイルアップロードユースケース
///
/// 1. ローカルファイルを列挙（空なら中止）
/// 2. リモートフォルダを作成（失敗したら中止）
/// 3. 最大 `max_parallel` 件ずつ並列にアップロード
/// 4. 結果を集計
pub struct UploadFilesUseCase<R: SourceRepository, S: StorageRepository> {
    discover_use_case: DiscoverFilesUseCase<R>,
    storage_repository: Arc<S>,
}

impl<R: SourceRepository, S: StorageRepository + 'static> UploadFilesUseCase<R, S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source_repository` - ソースリポジトリ
    /// * `storage_repository` - ストレージリポジトリ
    pub fn new(source_repository: Arc<R>, storage_repository: Arc<S>) -> Self {
        Self {
            discover_use_case: DiscoverFilesUseCase::new(source_repository),
            storage_repository,
        }
    }

    /// アップロードを実行する
    ///
    /// # Returns
    ///
    /// 全タスクの集計。ファイル単位の失敗はここに含まれ、エラーにはならない
    ///
    /// # Errors
    ///
    /// 設定不正・ローカルフォルダが空または読めない・リモートフォルダ作成失敗の場合、
    /// ファイルを1件もアップロードせずにエラーを返す
    pub async fn execute(&self, config: &UploadConfig) -> Result<RunSummary, UploadError> {
        config.validate()?;

        let tasks = self.discover_use_case.execute(&config.local_folder).await?;
        info!(
            "Found {} files in {}",
            tasks.len(),
            config.local_folder.display()
        );

        // フォルダ作成は全ワーカーの起動前に完了させる
        self.storage_repository
            .create_folder(&config.remote_folder)
            .await
            .map_err(|source| UploadError::FolderCreation {
                folder: config.remote_folder.clone(),
                source,
            })?;
        println!("✓ Created remote folder {}", config.remote_folder);

        let results = self.upload_all(tasks, config).await;
        let summary = RunSummary::from_results(&results);

        info!(
            "Upload finished: {} of {} succeeded",
            summary.uploaded(),
            summary.total
        );

        Ok(summary)
    }

    /// 全タスクをワーカーに割り当て、全件の結果を回収する
    async fn upload_all(&self, tasks: Vec<FileTask>, config: &UploadConfig) -> Vec<UploadResult> {
        let semaphore = Arc::new(Semaphore::new(config.max_parallel));
        let mut handles = Vec::with_capacity(tasks.len());

        for task in tasks {
            let semaphore = Arc::clone(&semaphore);
            let storage = Arc::clone(&self.storage_repository);
            let remote_folder = config.remote_folder.clone();
            let overwrite = config.allow_overwrite;
            let file_name = task.file_name.clone();

            let handle = tokio::spawn(async move {
                // 空きスロットができるまで待機
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return UploadResult::failure(task.file_name, e.to_string()),
                };

                let result = upload_one(storage.as_ref(), &remote_folder, &task, overwrite).await;
                let result = OutcomeClassifier::classify(&task.file_name, result);
                print_result(&result);
                result
            });

            handles.push((file_name, handle));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (file_name, handle) in handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    let result = UploadResult::failure(file_name, format!("worker failed: {}", e));
                    print_result(&result);
                    results.push(result);
                }
            }
        }

        results
    }
}

/// ファイル1件のアップロード手順
///
/// アップロード先URLの取得が完了してから転送を始める
async fn upload_one<S: StorageRepository + ?Sized>(
    storage: &S,
    remote_folder: &str,
    task: &FileTask,
    overwrite: bool,
) -> Result<(), UploadError> {
    let upload_url = storage
        .request_upload_target(remote_folder, &task.file_name, overwrite)
        .await
        .map_err(|source| OutcomeClassifier::target_error(&task.file_name, source))?;
    debug!("Upload link for {}: {}", task.file_name, upload_url);

    let local_file_error = |source| UploadError::LocalFile {
        path: task.local_path.clone(),
        source,
    };
    let file = File::open(&task.local_path).await.map_err(local_file_error)?;
    let length = file.metadata().await.map_err(local_file_error)?.len();

    println!("→ {} - uploading ({} bytes)", task.file_name, length);

    storage
        .upload_bytes(&upload_url, file, length)
        .await
        .map_err(|source| UploadError::Transfer {
            file_name: task.file_name.clone(),
            source,
        })
}

fn print_result(result: &UploadResult) {
    match &result.outcome {
        UploadOutcome::Success => println!("✓ {} - uploaded", result.file_name),
        UploadOutcome::Conflict => println!("⚠ {} - already exists", result.file_name),
        UploadOutcome::Failure(reason) => {
            println!("✗ {} - could not be uploaded: {}", result.file_name, reason)
        }
    }
}
