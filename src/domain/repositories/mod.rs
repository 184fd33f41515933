//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! - **SourceRepository**: ローカルファイルの列挙
//! - **StorageRepository**: リモートストレージへのHTTP操作
//!
//! 実装はAdapter層が提供する

pub mod source_repository;
pub mod storage_repository;
