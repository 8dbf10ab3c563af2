/// DynamoDBのリソーステーブルにアクセスするストアゲートウェイ
///
/// テーブルは`resource_identifier`（パーティションキー）と
/// `modifiedDate`（ソートキー）で構成され、更新のたびに新しいバージョンが追加される。
///
/// 読み取り→書き込みの間にロックや条件付き書き込みはない。
/// 同一リソースへの同時modifyは後勝ちになる。
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::constants::FIELD_RESOURCE_IDENTIFIER;
use crate::domain::{decode_resource, encode_resource, Resource};

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// データのシリアライズ/デシリアライズに失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// リソース永続化用トレイト
///
/// 実際のDynamoDBとテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// 識別子に対応する最新バージョン（modifiedDate降順の先頭）を取得
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(Resource))`
    /// * 見つからなかった場合は`Ok(None)`
    async fn get_latest(&self, identifier: &str) -> Result<Option<Resource>, RepositoryError>;

    /// 識別子に対応する全バージョンを新しい順に取得
    async fn list_versions(&self, identifier: &str) -> Result<Vec<Resource>, RepositoryError>;

    /// レコードを無条件に書き込む（同じキーは上書き）
    async fn put(&self, resource: &Resource) -> Result<(), RepositoryError>;
}

/// 書き込み前にキー属性の存在を確認
fn ensure_key_attributes(resource: &Resource) -> Result<(), RepositoryError> {
    if resource.resource_identifier.is_none() {
        return Err(RepositoryError::WriteError(
            "Record has no resource_identifier".to_string(),
        ));
    }
    if resource.modified_date.is_none() {
        return Err(RepositoryError::WriteError(
            "Record has no modifiedDate".to_string(),
        ));
    }
    Ok(())
}

/// ResourceRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoResourceRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// リソーステーブル名
    table_name: String,
}

impl DynamoResourceRepository {
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// リソースをDynamoDBアイテムに変換
    ///
    /// エンコーダーの出力（存在しないフィールドは省略済み）をそのまま属性マップにする。
    fn to_item(resource: &Resource) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
        let encoded = encode_resource(resource)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        serde_dynamo::to_item(encoded)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    /// DynamoDBアイテムをリソースに変換
    fn from_item(item: HashMap<String, AttributeValue>) -> Result<Resource, RepositoryError> {
        let value: Value = serde_dynamo::from_item(item)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        decode_resource(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    /// 識別子でクエリ（modifiedDate降順）
    ///
    /// `limit`が指定された場合は1ページのみ取得し、
    /// 指定がなければLastEvaluatedKeyがなくなるまでページングする。
    async fn query_items(
        &self,
        identifier: &str,
        limit: Option<i32>,
    ) -> Result<Vec<HashMap<String, AttributeValue>>, RepositoryError> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#rid = :rid")
                .expression_attribute_names("#rid", FIELD_RESOURCE_IDENTIFIER)
                .expression_attribute_values(":rid", AttributeValue::S(identifier.to_string()))
                .scan_index_forward(false) // modifiedDate降順
                .set_limit(limit)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

            items.extend(output.items.unwrap_or_default());

            match output.last_evaluated_key {
                Some(key) if limit.is_none() && !key.is_empty() => {
                    exclusive_start_key = Some(key);
                }
                _ => break,
            }
        }

        debug!(
            resource_identifier = identifier,
            item_count = items.len(),
            "リソースクエリ完了"
        );

        Ok(items)
    }
}

#[async_trait]
impl ResourceRepository for DynamoResourceRepository {
    async fn get_latest(&self, identifier: &str) -> Result<Option<Resource>, RepositoryError> {
        let items = self.query_items(identifier, Some(1)).await?;
        items.into_iter().next().map(Self::from_item).transpose()
    }

    async fn list_versions(&self, identifier: &str) -> Result<Vec<Resource>, RepositoryError> {
        self.query_items(identifier, None)
            .await?
            .into_iter()
            .map(Self::from_item)
            .collect()
    }

    async fn put(&self, resource: &Resource) -> Result<(), RepositoryError> {
        ensure_key_attributes(resource)?;
        let item = Self::to_item(resource)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }
}
