//! # FileTask Value Object
//!
//! アップロード対象となるローカルファイル1件

use std::path::{Path, PathBuf};

/// アップロードタスク
///
/// ローカルフォルダ内で発見されたファイル1件につき1つ作成される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    /// ローカルファイルのパス
    pub local_path: PathBuf,
    /// リモート側で使用するファイル名
    pub file_name: String,
}

impl FileTask {
    /// パスからタスクを作成
    ///
    /// ファイル名を取り出せないパス（`..` やルートなど）の場合は `None` を返す
    ///
    /// ```
    /// use diskpush::domain::entities::file_task::FileTask;
    ///
    /// let task = FileTask::from_path("/data/photos/cat.jpg").unwrap();
    /// assert_eq!(task.file_name, "cat.jpg");
    ///
    /// assert!(FileTask::from_path("/").is_none());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let file_name = path.file_name()?.to_string_lossy().into_owned();

        Some(Self {
            local_path: path.to_path_buf(),
            file_name,
        })
    }
}
