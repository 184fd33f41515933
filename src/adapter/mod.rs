//! Adapter Layer
//!
//! 外部システム（ディスクREST API, ファイルシステム, 設定ファイル）との統合

pub mod config;
pub mod disk;
pub mod repositories;
