/// リソース取得ハンドラー（GET /resource/{identifier}）
///
/// 識別子に対応する全バージョンを新しい順に返す。
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::constants::{HTTP_METHOD_GET, RESULT_COUNT, RESULT_ITEMS};
use crate::domain::{encode_resource, Resource};
use crate::infrastructure::ResourceRepository;

use super::handler_error::HandlerError;
use super::request::RequestDescriptor;
use super::response::ResponseDescriptor;

/// リソース取得ハンドラー
pub struct FetchHandler<R>
where
    R: ResourceRepository,
{
    repository: R,
}

impl<R> FetchHandler<R>
where
    R: ResourceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 取得ワークフローを実行し、保存済みバージョンを新しい順に返す
    pub async fn handle(&self, event: &Value) -> Result<Vec<Resource>, HandlerError> {
        let request = RequestDescriptor::from_event(event);
        let (Some(identifier), Some(http_method)) =
            (request.path_identifier(), request.http_method())
        else {
            return Err(HandlerError::InsufficientParameters);
        };
        if http_method != HTTP_METHOD_GET {
            return Err(HandlerError::InsufficientParameters);
        }

        let versions = self.repository.list_versions(identifier).await?;
        debug!(
            resource_identifier = identifier,
            count = versions.len(),
            "リソース取得完了"
        );
        Ok(versions)
    }

    /// 取得ワークフローを実行し、レスポンス記述子を返す
    ///
    /// ボディは`{"Items": [...], "Count": n}`。該当なしの場合は404。
    pub async fn respond(&self, event: &Value) -> ResponseDescriptor {
        let result = match self.handle(event).await {
            Ok(versions) => Self::render(&versions).map(|body| (versions.is_empty(), body)),
            Err(err) => Err(err),
        };
        match result {
            Ok((true, body)) => ResponseDescriptor::not_found(body),
            Ok((false, body)) => ResponseDescriptor::ok(body),
            Err(err) => err.into_response(),
        }
    }

    fn render(versions: &[Resource]) -> Result<String, HandlerError> {
        let items = versions
            .iter()
            .map(encode_resource)
            .collect::<Result<Vec<_>, _>>()?;

        let mut object = Map::new();
        object.insert(RESULT_COUNT.to_string(), Value::from(items.len()));
        object.insert(RESULT_ITEMS.to_string(), Value::Array(items));
        Ok(Value::Object(object).to_string())
    }
}
