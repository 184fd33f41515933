//! # UploadResult Value Object
//!
//! ファイル1件分のアップロード結果

/// アップロードの結末
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 正常に転送された
    Success,
    /// 同名ファイルが既に存在し、上書きが許可されていない
    Conflict,
    /// その他の失敗（理由つき）
    Failure(String),
}

/// アップロード結果
///
/// タスク1件につき必ず1つ生成される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub file_name: String,
    pub outcome: UploadOutcome,
}

impl UploadResult {
    pub fn success(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            outcome: UploadOutcome::Success,
        }
    }

    pub fn conflict(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            outcome: UploadOutcome::Conflict,
        }
    }

    pub fn failure(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            outcome: UploadOutcome::Failure(reason.into()),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome == UploadOutcome::Success
    }
}
