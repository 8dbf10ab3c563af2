/// リソース更新ハンドラー（PUT /resource/{identifier}）
///
/// 読み取り→検証→マージ→書き込みの順で既存リソースを全体置換する。
/// createdDateは常に保存済みの値を引き継ぎ、リクエストの値は使わない。
///
/// 状態遷移: 受信 → パース → 検証 → 取得 → マージ → 保存 → 応答
/// （各段階から400/500に遷移しうる）
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::constants::{FIELD_RESOURCE_IDENTIFIER, HTTP_METHOD_PUT};
use crate::domain::{encode_resource, validate_for_modify, Resource};
use crate::infrastructure::{Clock, ResourceRepository, SystemClock};

use super::handler_error::HandlerError;
use super::request::{decode_body, RequestDescriptor};
use super::response::ResponseDescriptor;

/// 保存するレコードを組み立てる
///
/// リクエストの内容（metadata/files/owner/status等）で全体を置換し、
/// 識別子はパスの値、modifiedDateは現在時刻、createdDateは保存済みの値を使う。
pub fn merge_for_update(
    incoming: Resource,
    identifier: &str,
    stored_created_date: String,
    modified_date: String,
) -> Resource {
    Resource {
        resource_identifier: Some(identifier.to_string()),
        modified_date: Some(modified_date),
        created_date: Some(stored_created_date),
        ..incoming
    }
}

/// リソース更新ハンドラー
pub struct ModifyHandler<R, C = SystemClock>
where
    R: ResourceRepository,
    C: Clock,
{
    repository: R,
    clock: C,
}

impl<R> ModifyHandler<R>
where
    R: ResourceRepository,
{
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C> ModifyHandler<R, C>
where
    R: ResourceRepository,
    C: Clock,
{
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// 更新ワークフローを実行し、保存したレコードを返す
    pub async fn handle(&self, event: &Value) -> Result<Resource, HandlerError> {
        // 受信: パス識別子とHTTPメソッドが必須
        let request = RequestDescriptor::from_event(event);
        let (Some(identifier), Some(http_method)) =
            (request.path_identifier(), request.http_method())
        else {
            return Err(HandlerError::InsufficientParameters);
        };

        // パース
        let body = request.parse_body()?;
        if http_method != HTTP_METHOD_PUT {
            return Err(HandlerError::InsufficientParameters);
        }
        let incoming = decode_body(body)?;

        // 検証
        validate_for_modify(&incoming)?;
        if incoming.identifier() != Some(identifier) {
            warn!(
                path_identifier = identifier,
                body_identifier = incoming.identifier().unwrap_or_default(),
                "ボディの識別子がパスと異なるためパスの値を使用"
            );
        }

        // 取得
        let stored = self
            .repository
            .get_latest(identifier)
            .await?
            .ok_or_else(|| HandlerError::ResourceNotFound(identifier.to_string()))?;
        let created_date = stored
            .created_date
            .ok_or_else(|| HandlerError::MissingCreatedDate(identifier.to_string()))?;

        // マージ
        let record = merge_for_update(incoming, identifier, created_date, self.clock.timestamp());

        // 保存
        self.repository.put(&record).await?;

        info!(
            resource_identifier = identifier,
            modified_date = record.modified_date.as_deref().unwrap_or_default(),
            "リソース更新完了"
        );

        Ok(record)
    }

    /// 更新ワークフローを実行し、レスポンス記述子を返す
    ///
    /// 成功時は200と保存したレコードのJSON（識別子を明示的に付与）。
    pub async fn respond(&self, event: &Value) -> ResponseDescriptor {
        let result = match self.handle(event).await {
            Ok(record) => Self::render(&record),
            Err(err) => Err(err),
        };
        match result {
            Ok(body) => ResponseDescriptor::ok(body),
            Err(err) => err.into_response(),
        }
    }

    fn render(record: &Resource) -> Result<String, HandlerError> {
        let mut encoded = encode_resource(record)?;
        if let (Value::Object(object), Some(identifier)) = (&mut encoded, record.identifier()) {
            object.insert(
                FIELD_RESOURCE_IDENTIFIER.to_string(),
                Value::String(identifier.to_string()),
            );
        }
        Ok(encoded.to_string())
    }
}
