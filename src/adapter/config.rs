//! Configuration File
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapter::disk::client::DEFAULT_API_BASE_URL;
use crate::application::dto::upload_config::UploadConfig;

/// 同時アップロード数の既定値
pub const DEFAULT_MAX_PARALLEL: usize = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Authentication
    pub auth_token: String,

    pub local_folder: String,
    pub remote_folder: String,

    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,
    #[serde(default)]
    pub allow_overwrite: bool,

    // API endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// 未指定ならタイムアウトなし
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_max_parallel() -> usize {
    DEFAULT_MAX_PARALLEL
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// `~` を展開したローカルフォルダのパス
    pub fn local_folder_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.local_folder).as_ref())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn to_upload_config(&self) -> UploadConfig {
        UploadConfig::new(
            self.auth_token.clone(),
            self.max_parallel,
            self.allow_overwrite,
            self.local_folder_path(),
            self.remote_folder.clone(),
        )
    }
}
