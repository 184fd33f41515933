//! # Outcome Classifier Service
//!
//! ファイル単位のエラーをアップロード結果に分類する

use crate::domain::entities::upload_result::UploadResult;
use crate::domain::errors::{RequestError, UploadError};

/// 結果分類サービス
pub struct OutcomeClassifier;

impl OutcomeClassifier {
    /// アップロード処理の戻り値を結果に変換
    ///
    /// 409 Conflict は `Conflict`、それ以外のエラーは理由つきの `Failure` になる
    pub fn classify(file_name: &str, result: Result<(), UploadError>) -> UploadResult {
        match result {
            Ok(()) => UploadResult::success(file_name),
            Err(e) if Self::is_conflict(&e) => UploadResult::conflict(file_name),
            Err(e) => UploadResult::failure(file_name, e.to_string()),
        }
    }

    /// エラーが既存ファイルとの衝突を示すかどうか
    pub fn is_conflict(error: &UploadError) -> bool {
        match error {
            UploadError::Conflict { .. } => true,
            UploadError::UploadTarget { source, .. } | UploadError::Transfer { source, .. } => {
                source.is_conflict()
            }
            _ => false,
        }
    }

    /// リクエストエラーを衝突とそれ以外に振り分ける
    pub fn target_error(file_name: &str, source: RequestError) -> UploadError {
        if source.is_conflict() {
            UploadError::Conflict {
                file_name: file_name.to_string(),
            }
        } else {
            UploadError::UploadTarget {
                file_name: file_name.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::upload_result::UploadOutcome;
    use std::path::PathBuf;

    fn status(code: u16) -> RequestError {
        RequestError::Status {
            status: code,
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_classify_success() {
        let result = OutcomeClassifier::classify("a.txt", Ok(()));
        assert_eq!(result, UploadResult::success("a.txt"));
    }

    #[test]
    fn test_classify_conflict() {
        let err = UploadError::Conflict {
            file_name: "a.txt".to_string(),
        };
        let result = OutcomeClassifier::classify("a.txt", Err(err));
        assert_eq!(result.outcome, UploadOutcome::Conflict);
    }

    #[test]
    fn test_classify_conflict_during_transfer() {
        let err = UploadError::Transfer {
            file_name: "a.txt".to_string(),
            source: status(409),
        };
        let result = OutcomeClassifier::classify("a.txt", Err(err));
        assert_eq!(result.outcome, UploadOutcome::Conflict);
    }

    #[test]
    fn test_classify_failure_keeps_reason() {
        let err = UploadError::UploadTarget {
            file_name: "a.txt".to_string(),
            source: status(503),
        };
        let result = OutcomeClassifier::classify("a.txt", Err(err));

        match result.outcome {
            UploadOutcome::Failure(reason) => {
                assert!(reason.contains("HTTP 503"), "unexpected reason: {}", reason)
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_io_failure() {
        let err = UploadError::LocalFile {
            path: PathBuf::from("/tmp/gone.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let result = OutcomeClassifier::classify("gone.txt", Err(err));
        assert!(matches!(result.outcome, UploadOutcome::Failure(_)));
    }

    #[test]
    fn test_target_error() {
        assert!(matches!(
            OutcomeClassifier::target_error("a.txt", status(409)),
            UploadError::Conflict { .. }
        ));
        assert!(matches!(
            OutcomeClassifier::target_error("a.txt", status(404)),
            UploadError::UploadTarget { .. }
        ));
        assert!(matches!(
            OutcomeClassifier::target_error("a.txt", RequestError::MissingHref),
            UploadError::UploadTarget { .. }
        ));
    }
}
