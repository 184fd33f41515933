//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **FileTask**: アップロード対象ファイル1件
//! - **UploadResult**: ファイル1件の結果
//! - **RunSummary / RunReport**: 実行全体の集計

pub mod file_task;
pub mod run_summary;
pub mod upload_result;
