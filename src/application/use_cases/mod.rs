//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverFilesUseCase**: アップロード対象ファイルの発見
//! - **UploadFilesUseCase**: 並列数を制限したアップロードと集計

pub mod discover_files;
pub mod upload_files;
