//! # Driver Layer (Presentation)
//!
//! CLIと設定から依存関係を組み立て、ユースケースを起動する
//!
//! - **cli**: CLI引数のパースと設定の上書き
//! - **workflow**: アップロード全体のオーケストレーションと結果表示

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::UploadWorkflow;
