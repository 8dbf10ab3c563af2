/// リクエストボディ/ストアレコード→リソースのデコーダー
///
/// 型の不一致（metadataが文字列など）はここでは拒否しない。
/// バリデータがデコード後に判定する。
use serde_json::Value;
use thiserror::Error;

use super::constants::EVENT_RESOURCE_ENVELOPE;
use super::resource::Resource;

/// デコードエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// JSONとしてパースできない（パーサーのメッセージをそのまま保持）
    #[error("{0}")]
    MalformedJson(String),
    /// リソースがJSONオブジェクトでない
    #[error("Resource must be a JSON object")]
    NotAnObject,
    /// フィールドの型がリソースの形に合わない
    #[error("Invalid resource: {0}")]
    InvalidResource(String),
}

/// リクエストボディ文字列をJSONとしてパース
pub fn parse_body(body: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(body).map_err(|e| DecodeError::MalformedJson(e.to_string()))
}

/// JSON値をリソースにデコード
///
/// `{"resource": {...}}`形式のエンベロープは展開してからデコードする。
pub fn decode_resource(value: Value) -> Result<Resource, DecodeError> {
    let value = unwrap_envelope(value);
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    serde_json::from_value(value).map_err(|e| DecodeError::InvalidResource(e.to_string()))
}

fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut object)
            if object
                .get(EVENT_RESOURCE_ENVELOPE)
                .is_some_and(Value::is_object) =>
        {
            object
                .remove(EVENT_RESOURCE_ENVELOPE)
                .unwrap_or(Value::Null)
        }
        other => other,
    }
}
