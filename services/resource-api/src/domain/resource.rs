/// 公開対象リソースのデータモデル
///
/// リクエストボディと永続化レコードは同じ形をとるため、
/// 一つの`Resource`型で両方を表現する。
use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::file_metadata::Files;
use super::metadata::Metadata;

/// マッピング型であるべき属性のデコード結果
///
/// デコード時点では型の不一致を拒否せず`Other`として保持し、
/// 判定はバリデータに委ねる（デコード→バリデーションの二段構成）。
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T> {
    /// JSONオブジェクトとして受け取り、型付きの値に変換できた
    Mapping(T),
    /// オブジェクト以外の値（文字列、配列、数値など）
    Other(Value),
}

impl<T> Shape<T> {
    /// マッピング型かどうか
    pub fn is_mapping(&self) -> bool {
        matches!(self, Shape::Mapping(_))
    }

    /// マッピング型の場合に中身への参照を返す
    pub fn as_mapping(&self) -> Option<&T> {
        match self {
            Shape::Mapping(value) => Some(value),
            Shape::Other(_) => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Shape<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_object() {
            serde_json::from_value(value)
                .map(Shape::Mapping)
                .map_err(D::Error::custom)
        } else {
            Ok(Shape::Other(value))
        }
    }
}

/// 公開対象リソース
///
/// - `resource_identifier`: サーバー側で採番され、以後不変
/// - `modified_date`: 書き込みのたびにサーバー時刻で上書き
/// - `created_date`: 作成時に一度だけ設定され、更新で上書きされない
/// - `metadata` / `files` / `owner`: insert/modifyで必須
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub resource_identifier: Option<String>,

    #[serde(default, rename = "modifiedDate")]
    pub modified_date: Option<String>,

    #[serde(default, rename = "createdDate")]
    pub created_date: Option<String>,

    #[serde(default)]
    pub metadata: Option<Shape<Metadata>>,

    #[serde(default)]
    pub files: Option<Shape<Files>>,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, rename = "publishedDate")]
    pub published_date: Option<String>,

    #[serde(default, rename = "indexedDate")]
    pub indexed_date: Option<String>,
}

impl Resource {
    /// 識別子を文字列参照として取得
    pub fn identifier(&self) -> Option<&str> {
        self.resource_identifier.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_resource() {
        let resource: Resource = serde_json::from_value(json!({
            "resource_identifier": "abc",
            "modifiedDate": "2020-01-29T14:32:43.770000+00:00",
            "createdDate": "2020-01-28T10:00:00.000000+00:00",
            "metadata": {"handle": "h"},
            "files": {"f1": {"filename": "a.pdf"}},
            "owner": "owner@unit.no",
            "status": "New",
            "publishedDate": "p",
            "indexedDate": "i"
        }))
        .unwrap();

        assert_eq!(resource.identifier(), Some("abc"));
        assert_eq!(resource.owner.as_deref(), Some("owner@unit.no"));
        assert_eq!(resource.status.as_deref(), Some("New"));
        assert_eq!(resource.published_date.as_deref(), Some("p"));
        assert_eq!(resource.indexed_date.as_deref(), Some("i"));
        assert!(resource.metadata.as_ref().unwrap().is_mapping());
        let files = resource.files.as_ref().unwrap().as_mapping().unwrap();
        assert_eq!(files["f1"].filename.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let resource: Resource =
            serde_json::from_value(json!({"owner": null, "metadata": null})).unwrap();

        assert_eq!(resource, Resource::default());
    }

    /// マッピング以外のmetadata/filesはデコードで拒否されずOtherとして残る
    #[test]
    fn test_non_mapping_attributes_pass_through() {
        let resource: Resource = serde_json::from_value(json!({
            "metadata": "not a mapping",
            "files": [1, 2]
        }))
        .unwrap();

        assert_eq!(resource.metadata, Some(Shape::Other(json!("not a mapping"))));
        assert_eq!(resource.files, Some(Shape::Other(json!([1, 2]))));
        assert!(!resource.files.unwrap().is_mapping());
    }

    #[test]
    fn test_mapping_with_wrong_field_types_is_rejected() {
        let result: Result<Resource, _> =
            serde_json::from_value(json!({"metadata": {"titles": "no"}}));

        assert!(result.is_err());
    }

    #[test]
    fn test_owner_must_be_string() {
        let result: Result<Resource, _> = serde_json::from_value(json!({"owner": 5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let resource: Resource =
            serde_json::from_value(json!({"owner": "x", "entityDescription": {}})).unwrap();
        assert_eq!(resource.owner.as_deref(), Some("x"));
    }
}
