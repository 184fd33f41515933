//! Disk REST API Client
//!
//! StorageRepositoryのHTTP実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH};
use reqwest::{Body, Client, Method, RequestBuilder, Response};
use std::time::Duration;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use super::models::{error_message, UploadLink};
use crate::domain::errors::RequestError;
use crate::domain::repositories::storage_repository::StorageRepository;

/// Yandex.Disk REST API v1
pub const DEFAULT_API_BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk";

/// ファイル転送時の読み込み単位
pub const UPLOAD_CHUNK_SIZE: usize = 8 * 1024;

/// 認証付きでディスクAPIを呼び出すクライアント
pub struct DiskClient {
    http: Client,
    base_url: String,
    auth_token: String,
}

impl DiskClient {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    ///
    /// * `base_url` - APIのルートURL（末尾の `/` は無視される）
    /// * `auth_token` - `Authorization` ヘッダーの値
    /// * `timeout` - リクエスト単位のタイムアウト（`None` なら無制限）
    pub fn new(base_url: &str, auth_token: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    fn resources_url(&self, suffix: &str) -> String {
        format!("{}/resources{}", self.base_url, suffix)
    }

    /// 認証ヘッダー付きのリクエストを組み立てる
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(AUTHORIZATION, self.auth_token.as_str())
    }

    /// リクエストを送信し、2xx以外をエラーに変換する
    async fn send(builder: RequestBuilder) -> Result<Response, RequestError> {
        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::Transport(describe(&e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status.canonical_reason().unwrap_or("unexpected status");
        let body = response.text().await.unwrap_or_default();
        Err(RequestError::Status {
            status: status.as_u16(),
            message: error_message(&body, fallback),
        })
    }
}

#[async_trait]
impl StorageRepository for DiskClient {
    async fn create_folder(&self, remote_folder: &str) -> Result<(), RequestError> {
        debug!("PUT resources?path={}", remote_folder);
        let builder = self
            .request(Method::PUT, &self.resources_url(""))
            .query(&[("path", remote_folder)]);

        Self::send(builder).await.map(|_| ())
    }

    async fn request_upload_target(
        &self,
        remote_folder: &str,
        file_name: &str,
        overwrite: bool,
    ) -> Result<String, RequestError> {
        let path = format!("{}/{}", remote_folder.trim_end_matches('/'), file_name);
        let overwrite = if overwrite { "true" } else { "false" };
        debug!("GET resources/upload?path={}&overwrite={}", path, overwrite);

        let builder = self
            .request(Method::GET, &self.resources_url("/upload"))
            .query(&[("path", path.as_str()), ("overwrite", overwrite)]);
        let response = Self::send(builder).await?;

        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(describe(&e)))?;
        let link: UploadLink =
            serde_json::from_str(&body).map_err(|e| RequestError::InvalidBody(e.to_string()))?;

        link.href
            .filter(|href| !href.is_empty())
            .ok_or(RequestError::MissingHref)
    }

    async fn upload_bytes(
        &self,
        upload_url: &str,
        content: File,
        length: u64,
    ) -> Result<(), RequestError> {
        // Content-Length を明示して chunked 転送にならないようにする
        let stream = ReaderStream::with_capacity(content, UPLOAD_CHUNK_SIZE);
        let builder = self
            .request(Method::PUT, upload_url)
            .header(CONTENT_LENGTH, length)
            .body(Body::wrap_stream(stream));

        Self::send(builder).await.map(|_| ())
    }
}

/// エラーの原因チェーンを連結した文字列
fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(" | ")
}
