//! Disk REST API payloads
//!
//! APIレスポンスのJSON表現

use serde::Deserialize;

/// `GET /resources/upload` のレスポンス
///
/// `href` 以外は参照しないが、ログ用に保持する
#[derive(Debug, Clone, Deserialize)]
pub struct UploadLink {
    pub href: Option<String>,
    pub method: Option<String>,
    pub templated: Option<bool>,
    pub operation_id: Option<String>,
}

/// エラー時のレスポンスボディ
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub description: Option<String>,
    pub error: Option<String>,
}

/// エラーレスポンスから人間向けのメッセージを作る
///
/// JSONとして読めればその `message`（なければ `description`, `error`）を使い、
/// 読めなければ `fallback` を返す
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.description).or(b.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
