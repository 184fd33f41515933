//! # RunSummary / RunReport
//!
//! 実行全体の集計結果

use std::fmt;

use super::upload_result::UploadResult;

/// 致命的エラーで中止された場合のサマリー
pub const CANCELLED_SUMMARY: &str = "transfer cancelled";

/// 全ファイル成功時のサマリー
pub const ALL_UPLOADED_SUMMARY: &str = "all uploaded";

/// 実行の集計
///
/// `failed <= total` が常に成り立つ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// 対象ファイル数
    pub total: usize,
    /// 成功しなかったファイル数（Conflictを含む）
    pub failed: usize,
}

impl RunSummary {
    /// 結果の集合から集計を作成
    ///
    /// 結果の順序には依存しない
    ///
    /// ```
    /// use diskpush::domain::entities::run_summary::RunSummary;
    /// use diskpush::domain::entities::upload_result::UploadResult;
    ///
    /// let results = vec![
    ///     UploadResult::success("a.txt"),
    ///     UploadResult::conflict("b.txt"),
    ///     UploadResult::failure("c.txt", "connection reset"),
    /// ];
    /// let summary = RunSummary::from_results(&results);
    ///
    /// assert_eq!(summary.total, 3);
    /// assert_eq!(summary.failed, 2);
    /// assert_eq!(summary.summary_line(), "1 of 3 uploaded");
    /// ```
    pub fn from_results(results: &[UploadResult]) -> Self {
        Self {
            total: results.len(),
            failed: results.iter().filter(|r| !r.is_success()).count(),
        }
    }

    /// アップロードに成功したファイル数
    #[inline]
    pub fn uploaded(&self) -> usize {
        self.total - self.failed
    }

    /// 全件成功したかどうか
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// 人間向けのサマリー行
    pub fn summary_line(&self) -> String {
        if self.is_success() {
            ALL_UPLOADED_SUMMARY.to_string()
        } else {
            format!("{} of {} uploaded", self.uploaded(), self.total)
        }
    }
}

/// 実行結果
///
/// 完了した実行の集計、または致命的エラーによる中止
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    Completed(RunSummary),
    Cancelled { reason: String },
}

impl RunReport {
    pub fn summary_line(&self) -> String {
        match self {
            RunReport::Completed(summary) => summary.summary_line(),
            RunReport::Cancelled { .. } => CANCELLED_SUMMARY.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunReport::Cancelled { .. })
    }
}

impl<E: fmt::Display> From<Result<RunSummary, E>> for RunReport {
    fn from(result: Result<RunSummary, E>) -> Self {
        match result {
            Ok(summary) => RunReport::Completed(summary),
            Err(e) => RunReport::Cancelled {
                reason: e.to_string(),
            },
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_uploaded() {
        let results: Vec<UploadResult> = (0..5)
            .map(|i| UploadResult::success(format!("file-{}.txt", i)))
            .collect();

        let summary = RunSummary::from_results(&results);

        assert_eq!(summary, RunSummary { total: 5, failed: 0 });
        assert!(summary.is_success());
        assert_eq!(summary.summary_line(), "all uploaded");
    }

    #[test]
    fn test_partial_upload() {
        let results = vec![
            UploadResult::success("1.txt"),
            UploadResult::conflict("2.txt"),
            UploadResult::success("3.txt"),
            UploadResult::conflict("4.txt"),
            UploadResult::success("5.txt"),
        ];

        let summary = RunSummary::from_results(&results);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.uploaded(), 3);
        assert_eq!(summary.summary_line(), "3 of 5 uploaded");
    }

    #[test]
    fn test_nothing_uploaded() {
        let results = vec![
            UploadResult::failure("1.txt", "HTTP 500"),
            UploadResult::failure("2.txt", "HTTP 500"),
        ];

        let summary = RunSummary::from_results(&results);

        assert_eq!(summary.summary_line(), "0 of 2 uploaded");
    }

    #[test]
    fn test_order_independent() {
        let mut results = vec![
            UploadResult::failure("a", "x"),
            UploadResult::success("b"),
            UploadResult::conflict("c"),
        ];
        let forward = RunSummary::from_results(&results);
        results.reverse();
        let backward = RunSummary::from_results(&results);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_report_from_ok() {
        let report: RunReport = Ok::<_, String>(RunSummary { total: 2, failed: 0 }).into();
        assert!(!report.is_cancelled());
        assert_eq!(report.to_string(), "all uploaded");
    }

    #[test]
    fn test_report_from_err() {
        let report: RunReport = Err::<RunSummary, _>("local folder is empty").into();
        assert!(report.is_cancelled());
        assert_eq!(report.summary_line(), "transfer cancelled");
        assert_eq!(
            report,
            RunReport::Cancelled {
                reason: "local folder is empty".to_string()
            }
        );
    }
}
