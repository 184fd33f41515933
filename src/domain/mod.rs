//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPクライアントやファイルシステムの実装を知らない
//! - 純粋なビジネスロジック（結果の分類と集計）
//!
//! ## 構成要素
//!
//! - **entities**: FileTask, UploadResult, RunSummary
//! - **errors**: RequestError, UploadError
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（結果分類）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
