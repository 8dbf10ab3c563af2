/// API Gatewayプロキシイベント（リクエスト記述子）の解析
use serde_json::Value;

use crate::domain::constants::{
    EVENT_BODY, EVENT_HTTP_METHOD, EVENT_PATH_PARAMETERS, EVENT_PATH_PARAMETER_IDENTIFIER,
};
use crate::domain::{decode_resource, parse_body, Resource};

use super::handler_error::HandlerError;

/// リクエスト記述子
///
/// イベントがnullや想定外の形でも解析は失敗させず、
/// 取り出せなかった項目を`None`として保持する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDescriptor {
    http_method: Option<String>,
    body: Option<String>,
    path_identifier: Option<String>,
}

impl RequestDescriptor {
    /// Lambdaイベントからリクエスト記述子を作成
    pub fn from_event(event: &Value) -> Self {
        let http_method = event
            .get(EVENT_HTTP_METHOD)
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let body = event
            .get(EVENT_BODY)
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let path_identifier = event
            .get(EVENT_PATH_PARAMETERS)
            .and_then(|params| params.get(EVENT_PATH_PARAMETER_IDENTIFIER))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Self {
            http_method,
            body,
            path_identifier,
        }
    }

    pub fn http_method(&self) -> Option<&str> {
        self.http_method.as_deref()
    }

    /// 空でないボディ
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }

    /// 空でないパス識別子
    pub fn path_identifier(&self) -> Option<&str> {
        self.path_identifier.as_deref().filter(|id| !id.is_empty())
    }

    /// HTTPメソッドと空でないボディがそろっているかを確認し、メソッドを返す
    ///
    /// DynamoDBへ接続する前に行える入力チェック。
    pub fn require_method_and_body(&self) -> Result<&str, HandlerError> {
        match (self.http_method(), self.body()) {
            (Some(http_method), Some(_)) => Ok(http_method),
            _ => Err(HandlerError::InsufficientParameters),
        }
    }

    /// ボディをJSONとしてパース
    ///
    /// ボディがない・空・`null`の場合は必須パラメータ不足として扱う。
    pub fn parse_body(&self) -> Result<Value, HandlerError> {
        let body = self.body().ok_or(HandlerError::InsufficientParameters)?;
        match parse_body(body)? {
            Value::Null => Err(HandlerError::InsufficientParameters),
            value => Ok(value),
        }
    }
}

/// パース済みボディをリソースにデコード
pub fn decode_body(body: Value) -> Result<Resource, HandlerError> {
    Ok(decode_resource(body)?)
}
