//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::disk::client::DiskClient;
use crate::adapter::repositories::file_source_repository::FileSourceRepository;
use crate::application::use_cases::discover_files::DiscoverFilesUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::entities::run_summary::RunReport;

use super::cli::Args;

/// Folder Upload Workflow
pub struct UploadWorkflow {
    config: Config,
    source_repository: Arc<FileSourceRepository>,
}

impl UploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self {
            config,
            source_repository: Arc::new(FileSourceRepository::new()),
        }
    }

    /// Execute the workflow selected by the CLI flags
    ///
    /// A cancelled run is reported on stdout, not as an error
    pub async fn execute(&self, args: &Args) -> Result<()> {
        info!("Starting disk uploader...");
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using configuration:");
        println!("  Local folder: {}", self.config.local_folder_path().display());
        println!("  Remote folder: {}", self.config.remote_folder);
        println!("  Max parallel uploads: {}", self.config.max_parallel);
        println!("  Overwrite existing: {}", self.config.allow_overwrite);

        if args.dry_run {
            self.preview().await;
            return Ok(());
        }

        self.upload().await?;
        Ok(())
    }

    /// List the files that would be uploaded
    pub async fn preview(&self) {
        let discover_use_case = DiscoverFilesUseCase::new(self.source_repository.clone());
        let local_folder = self.config.local_folder_path();

        match discover_use_case.execute(&local_folder).await {
            Ok(tasks) => {
                println!("✓ Dry-run mode (not actually uploading)");
                println!(
                    "  Would upload {} files to {}:",
                    tasks.len(),
                    self.config.remote_folder
                );
                for task in &tasks {
                    println!("    - {}", task.file_name);
                }
            }
            Err(e) => println!("✗ {}", e),
        }
    }

    /// Upload the local folder and print the summary line
    ///
    /// # Errors
    ///
    /// Only when the HTTP client cannot be built; run failures are part of the report
    pub async fn upload(&self) -> Result<RunReport> {
        let upload_config = self.config.to_upload_config();
        let storage = Arc::new(DiskClient::new(
            &self.config.api_base_url,
            &upload_config.auth_token,
            self.config.request_timeout(),
        )?);
        let upload_use_case = UploadFilesUseCase::new(self.source_repository.clone(), storage);

        let report = RunReport::from(upload_use_case.execute(&upload_config).await);

        if let RunReport::Cancelled { reason } = &report {
            println!("✗ {}", reason);
        }
        println!("{}", report.summary_line());

        Ok(report)
    }
}
