//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::Config;

/// ローカルフォルダのファイルをクラウドディスクにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "diskpush")]
#[command(about = "Upload the files of a local folder to a cloud disk folder", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./diskpush.json")]
    pub config: String,

    /// Local folder to upload from (overrides config)
    #[arg(long)]
    pub local_folder: Option<String>,

    /// Remote folder to upload into (overrides config)
    #[arg(long)]
    pub remote_folder: Option<String>,

    /// Maximum number of files uploaded at the same time (overrides config)
    #[arg(short = 'j', long)]
    pub max_parallel: Option<usize>,

    /// Overwrite files that already exist in the remote folder
    #[arg(long)]
    pub overwrite: bool,

    /// Dry run mode - list the files without uploading
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// コマンドライン指定で設定を上書きする
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(local_folder) = &self.local_folder {
            config.local_folder = local_folder.clone();
        }
        if let Some(remote_folder) = &self.remote_folder {
            config.remote_folder = remote_folder.clone();
        }
        if let Some(max_parallel) = self.max_parallel {
            config.max_parallel = max_parallel;
        }
        if self.overwrite {
            config.allow_overwrite = true;
        }
        config
    }
}
