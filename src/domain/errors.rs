//! # Domain Errors
//!
//! ストレージ通信とアップロード処理のエラー分類

use std::path::PathBuf;
use thiserror::Error;

/// HTTPステータス 409 Conflict
pub const STATUS_CONFLICT: u16 = 409;

/// ストレージAPIへのリクエストエラー
///
/// 個々のHTTP呼び出しの失敗を表す。ステータスコードは構造化して保持し、
/// 上位層はメッセージ文字列ではなく `status()` で判定する。
#[derive(Debug, Error)]
pub enum RequestError {
    /// 2xx以外のレスポンス
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// 接続失敗・タイムアウトなどの通信エラー
    #[error("request failed: {0}")]
    Transport(String),

    /// レスポンスに `href` が含まれていない
    #[error("response does not contain an upload link")]
    MissingHref,

    /// レスポンスボディが解析できない
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl RequestError {
    /// HTTPステータスコードを返す（ステータスエラーの場合のみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 409 Conflict かどうか
    ///
    /// ```
    /// use diskpush::domain::errors::RequestError;
    ///
    /// let conflict = RequestError::Status { status: 409, message: "exists".to_string() };
    /// assert!(conflict.is_conflict());
    ///
    /// let server = RequestError::Status { status: 500, message: "boom".to_string() };
    /// assert!(!server.is_conflict());
    /// ```
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(STATUS_CONFLICT)
    }
}

/// アップロード処理のエラー
///
/// 致命的なエラー（実行全体を中止する）とファイル単位のエラーがある。
/// ファイル単位のエラーはワーカー内で結果に変換され、呼び出し元へは伝播しない。
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read local folder {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("local folder is empty: {}", .0.display())]
    EmptySource(PathBuf),

    #[error("failed to create remote folder {folder}: {source}")]
    FolderCreation {
        folder: String,
        #[source]
        source: RequestError,
    },

    #[error("failed to get upload link for {file_name}: {source}")]
    UploadTarget {
        file_name: String,
        #[source]
        source: RequestError,
    },

    #[error("failed to open {}: {source}", .path.display())]
    LocalFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to transfer {file_name}: {source}")]
    Transfer {
        file_name: String,
        #[source]
        source: RequestError,
    },

    #[error("file {file_name} already exists")]
    Conflict { file_name: String },
}

impl UploadError {
    /// 実行全体を中止すべきエラーかどうか
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            UploadError::InvalidConfig(_)
                | UploadError::SourceRead { .. }
                | UploadError::EmptySource(_)
                | UploadError::FolderCreation { .. }
        )
    }
}
