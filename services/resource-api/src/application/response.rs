/// Lambdaへ返すレスポンス記述子
use std::collections::BTreeMap;

use lambda_http::http::StatusCode;
use serde_json::{Map, Value};

use crate::domain::constants::{
    HEADER_ACCESS_CONTROL_ALLOW_ORIGIN, RESPONSE_BODY, RESPONSE_HEADERS, RESPONSE_STATUS_CODE,
};
use crate::infrastructure::CorsConfig;

/// レスポンス記述子（statusCode / body / headers）
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDescriptor {
    status: StatusCode,
    body: String,
    headers: BTreeMap<String, String>,
}

impl ResponseDescriptor {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: BTreeMap::new(),
        }
    }

    /// 200 OK
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 201 Created
    pub fn created(body: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, body)
    }

    /// 404 Not Found
    pub fn not_found(body: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, body)
    }

    /// ALLOWED_ORIGINが設定されている場合のみCORSヘッダーを付与
    pub fn with_cors(mut self, cors: &CorsConfig) -> Self {
        if let Some(origin) = cors.allowed_origin() {
            self.headers.insert(
                HEADER_ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                origin.to_string(),
            );
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Lambdaの戻り値となるJSONに変換
    pub fn into_value(self) -> Value {
        let headers: Map<String, Value> = self
            .headers
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();

        let mut object = Map::new();
        object.insert(
            RESPONSE_STATUS_CODE.to_string(),
            Value::from(self.status.as_u16()),
        );
        object.insert(RESPONSE_BODY.to_string(), Value::String(self.body));
        object.insert(RESPONSE_HEADERS.to_string(), Value::Object(headers));
        Value::Object(object)
    }
}
