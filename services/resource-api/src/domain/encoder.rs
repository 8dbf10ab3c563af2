/// リソース→ワイヤJSON表現へのエンコーダー
///
/// 値が存在しないフィールドは`null`として出力せず、キーごと省略する。
/// 「存在しない」と「空」は区別され、空のマッピングはそのまま出力される。
use serde_json::{Map, Value};
use thiserror::Error;

use super::constants::*;
use super::file_metadata::{FileMetadata, Files};
use super::metadata::{Creator, Metadata};
use super::resource::{Resource, Shape};

/// エンコードエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// マッピング型であるべき属性が別の型だった
    #[error("Object of type '{found}' is not JSON serializable as {field}")]
    InvalidType {
        field: &'static str,
        found: &'static str,
    },
}

/// リソースをエンコード
pub fn encode_resource(resource: &Resource) -> Result<Value, EncodeError> {
    let metadata = resource
        .metadata
        .as_ref()
        .map(|shape| mapping(shape, FIELD_METADATA).map(encode_metadata))
        .transpose()?;
    let files = resource
        .files
        .as_ref()
        .map(|shape| mapping(shape, FIELD_FILES).map(encode_files))
        .transpose()?;

    let mut object = Map::new();
    insert_string(&mut object, FIELD_RESOURCE_IDENTIFIER, &resource.resource_identifier);
    insert_string(&mut object, FIELD_MODIFIED_DATE, &resource.modified_date);
    insert_string(&mut object, FIELD_CREATED_DATE, &resource.created_date);
    insert_present(&mut object, FIELD_METADATA, metadata);
    insert_present(&mut object, FIELD_FILES, files);
    insert_string(&mut object, FIELD_OWNER, &resource.owner);
    insert_string(&mut object, FIELD_STATUS, &resource.status);
    insert_string(&mut object, FIELD_PUBLISHED_DATE, &resource.published_date);
    insert_string(&mut object, FIELD_INDEXED_DATE, &resource.indexed_date);
    Ok(Value::Object(object))
}

/// メタデータをエンコード
///
/// `titles`は値がnullまたは空文字列のエントリを除外し、
/// 何も残らなければキーごと省略する。
pub fn encode_metadata(metadata: &Metadata) -> Value {
    let creators = metadata
        .creators
        .as_ref()
        .map(|creators| Value::Array(creators.iter().map(encode_creator).collect()));

    let titles = metadata.titles.as_ref().and_then(|titles| {
        let kept: Map<String, Value> = titles
            .iter()
            .filter_map(|(language, title)| {
                title
                    .as_ref()
                    .filter(|title| !title.is_empty())
                    .map(|title| (language.clone(), Value::String(title.clone())))
            })
            .collect();
        (!kept.is_empty()).then_some(Value::Object(kept))
    });

    let mut object = Map::new();
    insert_present(&mut object, "creators", creators);
    insert_string(&mut object, "handle", &metadata.handle);
    insert_string(&mut object, "license", &metadata.license_identifier);
    insert_string(&mut object, "publicationYear", &metadata.publication_year);
    insert_string(&mut object, "publisher", &metadata.publisher);
    insert_present(&mut object, "titles", titles);
    insert_string(&mut object, "type", &metadata.resource_type);
    Value::Object(object)
}

/// 作成者は識別子の文字列そのものになる
pub fn encode_creator(creator: &Creator) -> Value {
    Value::String(creator.identifier.clone())
}

/// ファイル識別子→ファイルメタデータのマッピングをエンコード
pub fn encode_files(files: &Files) -> Value {
    Value::Object(
        files
            .iter()
            .map(|(identifier, metadata)| (identifier.clone(), encode_file_metadata(metadata)))
            .collect(),
    )
}

pub fn encode_file_metadata(metadata: &FileMetadata) -> Value {
    let mut object = Map::new();
    insert_string(&mut object, "filename", &metadata.filename);
    insert_string(&mut object, "mimetype", &metadata.mime_type);
    insert_string(&mut object, "checksum", &metadata.checksum);
    insert_present(&mut object, "size", metadata.size.map(Value::from));
    Value::Object(object)
}

fn mapping<'a, T>(shape: &'a Shape<T>, field: &'static str) -> Result<&'a T, EncodeError> {
    match shape {
        Shape::Mapping(value) => Ok(value),
        Shape::Other(value) => Err(EncodeError::InvalidType {
            field,
            found: json_type_name(value),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn insert_present(object: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        object.insert(key.to_string(), value);
    }
}

fn insert_string(object: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    insert_present(object, key, value.clone().map(Value::String));
}
