/// リソースに添付されるファイルのメタデータ
use std::collections::BTreeMap;

use serde::Deserialize;

/// ファイル識別子→ファイルメタデータのマッピング
pub type Files = BTreeMap<String, FileMetadata>;

/// ファイルメタデータ（全フィールド任意）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileMetadata {
    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default, rename = "mimetype")]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub checksum: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,
}

/// 識別子とファイルメタデータの組
///
/// `files`マッピングを組み立てるためだけに使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub identifier: String,
    pub file_metadata: FileMetadata,
}

impl File {
    pub fn new(identifier: impl Into<String>, file_metadata: FileMetadata) -> Self {
        Self {
            identifier: identifier.into(),
            file_metadata,
        }
    }
}

/// `File`の列から`files`マッピングを構築する
///
/// 同じ識別子が複数ある場合は後勝ち。
pub fn collect_files(files: impl IntoIterator<Item = File>) -> Files {
    files
        .into_iter()
        .map(|file| (file.identifier, file.file_metadata))
        .collect()
}
