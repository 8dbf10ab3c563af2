/// リソース作成ハンドラー（POST /resource）
///
/// 識別子をサーバーで採番し、createdDateとmodifiedDateに同じ現在時刻を設定して保存する。
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::domain::constants::HTTP_METHOD_POST;
use crate::domain::{encode_resource, validate_for_insert, Resource};
use crate::infrastructure::{Clock, ResourceRepository, SystemClock};

use super::handler_error::HandlerError;
use super::request::{decode_body, RequestDescriptor};
use super::response::ResponseDescriptor;

/// リソース作成ハンドラー
pub struct InsertHandler<R, C = SystemClock>
where
    R: ResourceRepository,
    C: Clock,
{
    repository: R,
    clock: C,
}

impl<R> InsertHandler<R>
where
    R: ResourceRepository,
{
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C> InsertHandler<R, C>
where
    R: ResourceRepository,
    C: Clock,
{
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// 作成ワークフローを実行し、保存したレコードを返す
    pub async fn handle(&self, event: &Value) -> Result<Resource, HandlerError> {
        let request = RequestDescriptor::from_event(event);
        let http_method = request.require_method_and_body()?;

        let body = request.parse_body()?;
        if http_method != HTTP_METHOD_POST {
            return Err(HandlerError::InsufficientParameters);
        }
        let incoming = decode_body(body)?;
        validate_for_insert(&incoming)?;

        let identifier = Uuid::new_v4().to_string();
        let now = self.clock.timestamp();
        let record = Resource {
            resource_identifier: Some(identifier),
            created_date: Some(now.clone()),
            modified_date: Some(now),
            ..incoming
        };

        self.repository.put(&record).await?;

        info!(
            resource_identifier = record.identifier().unwrap_or_default(),
            "リソース作成完了"
        );

        Ok(record)
    }

    /// 作成ワークフローを実行し、レスポンス記述子を返す
    ///
    /// 成功時は201と、採番した識別子を含む保存済みレコードのJSON。
    pub async fn respond(&self, event: &Value) -> ResponseDescriptor {
        let result = match self.handle(event).await {
            Ok(record) => encode_resource(&record).map_err(HandlerError::from),
            Err(err) => Err(err),
        };
        match result {
            Ok(body) => ResponseDescriptor::created(body.to_string()),
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::tests::SteppingClock;
    use crate::infrastructure::logging::init_test_logging;
    use crate::infrastructure::resource_repository::tests::MockResourceRepository;
    use crate::infrastructure::RepositoryError;
    use lambda_http::http::StatusCode;
    use serde_json::json;

    fn create_test_handler() -> (
        InsertHandler<MockResourceRepository, SteppingClock>,
        MockResourceRepository,
    ) {
        init_test_logging();
        let repository = MockResourceRepository::new();
        let handler = InsertHandler::with_clock(repository.clone(), SteppingClock::starting_2020());
        (handler, repository)
    }

    fn create_event(http_method: &str, body: &Value) -> Value {
        json!({
            "httpMethod": http_method,
            "body": body.to_string()
        })
    }

    #[tokio::test]
    async fn test_insert_returns_201_with_generated_identifier() {
        let (handler, repository) = create_test_handler();
        let event = create_event(
            "POST",
            &json!({"resource": {"owner": "x", "files": {}, "metadata": {}}}),
        );

        let response = handler.respond(&event).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = serde_json::from_str(response.body()).unwrap();
        let identifier = body["resource_identifier"].as_str().unwrap();
        assert!(Uuid::parse_str(identifier).is_ok());
        assert_eq!(body["owner"], "x");
        assert_eq!(body["metadata"], json!({}));
        assert_eq!(body["files"], json!({}));
        assert_eq!(repository.versions(identifier).len(), 1);
    }

    #[tokio::test]
    async fn test_insert_sets_equal_created_and_modified_dates() {
        let (handler, _) = create_test_handler();
        let event = create_event("POST", &json!({"owner": "x", "files": {}, "metadata": {}}));

        let record = handler.handle(&event).await.unwrap();

        assert_eq!(
            record.created_date.as_deref(),
            Some("2020-01-01T00:00:00.000000+00:00")
        );
        assert_eq!(record.created_date, record.modified_date);
    }

    /// クライアント指定の日時は無視される
    #[tokio::test]
    async fn test_insert_ignores_client_dates() {
        let (handler, _) = create_test_handler();
        let event = create_event(
            "POST",
            &json!({
                "owner": "x",
                "files": {},
                "metadata": {},
                "createdDate": "1999-01-01",
                "modifiedDate": "1999-01-01"
            }),
        );

        let record = handler.handle(&event).await.unwrap();

        assert_ne!(record.created_date.as_deref(), Some("1999-01-01"));
        assert_ne!(record.modified_date.as_deref(), Some("1999-01-01"));
    }

    #[tokio::test]
    async fn test_insert_generates_distinct_identifiers() {
        let (handler, repository) = create_test_handler();
        let event = create_event("POST", &json!({"owner": "x", "files": {}, "metadata": {}}));

        let first = handler.handle(&event).await.unwrap();
        let second = handler.handle(&event).await.unwrap();

        assert_ne!(first.resource_identifier, second.resource_identifier);
        assert_eq!(repository.record_count(), 2);
    }

    #[tokio::test]
    async fn test_insert_with_client_identifier_is_rejected() {
        let (handler, repository) = create_test_handler();
        let event = create_event(
            "POST",
            &json!({"resource_identifier": "client-id", "owner": "x", "files": {}, "metadata": {}}),
        );

        let response = handler.respond(&event).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Resource has identifier");
        assert_eq!(repository.put_count(), 0);
    }

    #[tokio::test]
    async fn test_insert_missing_owner_is_rejected() {
        let (handler, _) = create_test_handler();
        let event = create_event("POST", &json!({"files": {}, "metadata": {}}));

        let response = handler.respond(&event).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Resource has no owner");
    }

    #[tokio::test]
    async fn test_insert_non_mapping_metadata_is_rejected() {
        let (handler, _) = create_test_handler();
        let event = create_event("POST", &json!({"owner": "x", "files": {}, "metadata": "m"}));

        let response = handler.respond(&event).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body(),
            "Resource has invalid attribute type for metadata"
        );
    }

    #[tokio::test]
    async fn test_insert_wrong_method_returns_400() {
        let (handler, _) = create_test_handler();
        let event = create_event("GET", &json!({"owner": "x", "files": {}, "metadata": {}}));

        let response = handler.respond(&event).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Insufficient parameters");
    }

    #[tokio::test]
    async fn test_insert_missing_body_returns_400() {
        let (handler, _) = create_test_handler();

        let response = handler.respond(&json!({"httpMethod": "POST"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handler
            .respond(&json!({"httpMethod": "POST", "body": ""}))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Insufficient parameters");
    }

    #[tokio::test]
    async fn test_insert_invalid_json_returns_400() {
        let (handler, _) = create_test_handler();

        let response = handler
            .respond(&json!({"httpMethod": "POST", "body": "{not json"}))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!response.body().is_empty());
    }

    #[tokio::test]
    async fn test_insert_write_failure_returns_500() {
        let (handler, repository) = create_test_handler();
        repository.set_next_put_error(RepositoryError::WriteError(
            "DynamoDB unavailable".to_string(),
        ));
        let event = create_event("POST", &json!({"owner": "x", "files": {}, "metadata": {}}));

        let response = handler.respond(&event).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body(), "Write error: DynamoDB unavailable");
    }
}
