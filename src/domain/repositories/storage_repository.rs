//! # Storage Repository Trait
//!
//! リモートストレージ操作を抽象化

use async_trait::async_trait;
use tokio::fs::File;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::RequestError;

/// ストレージリポジトリ
///
/// 論理的なストレージ操作を認証付きHTTP呼び出しに変換する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// リモートフォルダを作成する
    ///
    /// # Errors
    ///
    /// 2xx以外のレスポンス（既存フォルダの409を含む）でエラーを返す
    async fn create_folder(&self, remote_folder: &str) -> Result<(), RequestError>;

    /// ファイル1件のアップロード先URLを取得する
    ///
    /// # Arguments
    ///
    /// * `remote_folder` - アップロード先フォルダ
    /// * `file_name` - リモート側のファイル名
    /// * `overwrite` - 既存ファイルの上書きを許可するか
    ///
    /// # Returns
    ///
    /// バイト列を転送するための一時URL
    async fn request_upload_target(
        &self,
        remote_folder: &str,
        file_name: &str,
        overwrite: bool,
    ) -> Result<String, RequestError>;

    /// ファイル内容をアップロード先URLへストリーミング転送する
    ///
    /// # Arguments
    ///
    /// * `upload_url` - `request_upload_target` で取得したURL
    /// * `content` - 読み込み用に開いたローカルファイル
    /// * `length` - 転送するバイト数（ファイルサイズ）
    async fn upload_bytes(
        &self,
        upload_url: &str,
        content: File,
        length: u64,
    ) -> Result<(), RequestError>;
}
