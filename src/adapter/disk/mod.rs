//! Disk REST API Adapter Modules
//!
//! クラウドディスクREST API統合のためのアダプターモジュール

pub mod client;
pub mod models;
