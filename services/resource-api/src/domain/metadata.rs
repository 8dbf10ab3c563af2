/// リソースの書誌メタデータ
use std::collections::BTreeMap;

use serde::Deserialize;

/// 作成者
///
/// ワイヤ表現は識別子の文字列そのもの。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Creator {
    pub identifier: String,
}

impl Creator {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// 書誌メタデータ
///
/// すべてのフィールドが任意。`titles`は言語コード→タイトルのマッピングで、
/// 値が空のエントリはエンコード時に除外される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub creators: Option<Vec<Creator>>,

    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default, rename = "license")]
    pub license_identifier: Option<String>,

    #[serde(default, rename = "publicationYear")]
    pub publication_year: Option<String>,

    #[serde(default)]
    pub publisher: Option<String>,

    #[serde(default)]
    pub titles: Option<BTreeMap<String, Option<String>>>,

    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
}
