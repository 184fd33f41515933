//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

use std::path::PathBuf;
use tokio::sync::Semaphore;

use crate::domain::errors::UploadError;

/// アップロード設定
///
/// 1回の実行のあいだ不変。呼び出し側が一度だけ組み立てて渡す
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 認証トークン（`Authorization` ヘッダーにそのまま設定される）
    pub auth_token: String,
    /// 同時にアップロードするファイルの最大数
    pub max_parallel: usize,
    /// 既存ファイルの上書きを許可するかどうか
    pub allow_overwrite: bool,
    /// アップロード元のローカルフォルダ
    pub local_folder: PathBuf,
    /// アップロード先のリモートフォルダ
    pub remote_folder: String,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use diskpush::application::dto::upload_config::UploadConfig;
    ///
    /// let config = UploadConfig::new(
    ///     "OAuth y0_example".to_string(),
    ///     4,
    ///     false,
    ///     "/home/alice/photos".into(),
    ///     "Backup/photos".to_string(),
    /// );
    ///
    /// assert_eq!(config.max_parallel, 4);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(
        auth_token: String,
        max_parallel: usize,
        allow_overwrite: bool,
        local_folder: PathBuf,
        remote_folder: String,
    ) -> Self {
        Self {
            auth_token,
            max_parallel,
            allow_overwrite,
            local_folder,
            remote_folder,
        }
    }

    /// 設定値を検証する
    ///
    /// # Errors
    ///
    /// `max_parallel` が0または `Semaphore::MAX_PERMITS` を超える場合、
    /// トークンまたはリモートフォルダが空の場合に `UploadError::InvalidConfig` を返す
    pub fn validate(&self) -> Result<(), UploadError> {
        if self.max_parallel == 0 {
            return Err(UploadError::InvalidConfig(
                "max_parallel must be greater than 0".to_string(),
            ));
        }
        if self.max_parallel > Semaphore::MAX_PERMITS {
            return Err(UploadError::InvalidConfig(format!(
                "max_parallel must not exceed {}",
                Semaphore::MAX_PERMITS
            )));
        }
        if self.auth_token.trim().is_empty() {
            return Err(UploadError::InvalidConfig(
                "auth_token must not be empty".to_string(),
            ));
        }
        if self.remote_folder.trim().is_empty() {
            return Err(UploadError::InvalidConfig(
                "remote_folder must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
