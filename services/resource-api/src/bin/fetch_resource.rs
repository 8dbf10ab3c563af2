/// GET /resource/{identifier} ハンドラー
///
/// 識別子に対応するリソースの全バージョンをDynamoDBから取得して返す。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use resource_api::application::{FetchHandler, HandlerError, RequestDescriptor};
use resource_api::infrastructure::{
    init_logging, request_span, ConfigError, CorsConfig, DynamoResourceRepository, TableConfig,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::Instrument;

/// DynamoResourceRepositoryの静的インスタンス
///
/// warm start時にDynamoDBクライアントを再利用する。
static REPOSITORY: OnceCell<DynamoResourceRepository> = OnceCell::const_new();

/// リポジトリを取得（初期化されていなければ環境変数から初期化）
async fn get_repository() -> Result<&'static DynamoResourceRepository, ConfigError> {
    REPOSITORY
        .get_or_try_init(|| async {
            let config = TableConfig::from_env()?;
            let client = config.connect().await;
            Ok(DynamoResourceRepository::new(
                client,
                config.table_name().to_string(),
            ))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(process(&event.payload).await)
}

/// イベントを処理してAPI Gatewayプロキシ形式のレスポンスを返す
async fn process(payload: &Value) -> Value {
    let request = RequestDescriptor::from_event(payload);
    let span = request_span(
        "fetch_resource",
        request.http_method(),
        request.path_identifier(),
    );
    let cors = CorsConfig::from_env();

    let response = async {
        match get_repository().await {
            Ok(repository) => FetchHandler::new(repository.clone()).respond(payload).await,
            Err(err) => HandlerError::from(err).into_response(),
        }
    }
    .instrument(span)
    .await;

    response.with_cors(&cors).into_value()
}
