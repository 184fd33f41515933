//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Repository traitに依存し、HTTPやファイルシステムの実装には依存しない
//! - 並列数の制御と結果の集計はここで行う
//!
//! ## 構成要素
//!
//! - **dto**: UploadConfig
//! - **use_cases**: ファイル発見・アップロード

pub mod dto;
pub mod use_cases;
