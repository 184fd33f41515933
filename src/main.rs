//! Diskpush - Folder Uploader
//!
//! ローカルフォルダのファイルをクラウドディスクにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use diskpush::adapter::config::Config;
use diskpush::driver::{Args, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, command line flags take precedence
    let config = args.apply_to(Config::load(&args.config)?);

    // Create workflow with injected dependencies
    let workflow = UploadWorkflow::new(config);

    workflow.execute(&args).await
}
