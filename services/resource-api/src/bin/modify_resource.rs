/// PUT /resource/{identifier} ハンドラー
///
/// 既存リソースを全体置換する。createdDateは保存済みの値を引き継ぐ。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use resource_api::application::{HandlerError, ModifyHandler, RequestDescriptor};
use resource_api::infrastructure::{
    init_logging, request_span, ConfigError, CorsConfig, DynamoResourceRepository, TableConfig,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::Instrument;

/// DynamoResourceRepositoryの静的インスタンス
static REPOSITORY: OnceCell<DynamoResourceRepository> = OnceCell::const_new();

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

async fn process(payload: &Value) -> Value {
    let request = RequestDescriptor::from_event(payload);
    let span = request_span(
        "modify_resource",
        request.http_method(),
        request.path_identifier(),
    );
    let cors = CorsConfig::from_env();

    let response = async {
        match get_repository().await {
            Ok(repository) => ModifyHandler::new(repository.clone()).respond(payload).await,
            Err(err) => HandlerError::from(err).into_response(),
        }
    }
    .instrument(span)
    .await;

    response.with_cors(&cors).into_value()
}
