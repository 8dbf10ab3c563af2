/// リソーステーブルの接続設定とCORS設定
///
/// 環境変数:
/// - REGION: DynamoDBテーブルのリージョン（必須）
/// - TABLE_NAME: リソーステーブル名（必須）
/// - ALLOWED_ORIGIN: Access-Control-Allow-Originの値（任意）
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

use crate::domain::constants::{ENV_VAR_ALLOWED_ORIGIN, ENV_VAR_REGION, ENV_VAR_TABLE_NAME};

/// 設定読み込みのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// リージョン名がAWSリージョンの形式でない
    #[error("Region \"{0}\" is invalid")]
    InvalidRegion(String),
}

/// リソーステーブルの設定
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    region: String,
    table_name: String,
}

impl TableConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = std::env::var(ENV_VAR_REGION)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_VAR_REGION.to_string()))?;
        let table_name = std::env::var(ENV_VAR_TABLE_NAME)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_VAR_TABLE_NAME.to_string()))?;

        Self::new(region, table_name)
    }

    /// 明示的な値で設定を作成（リージョン形式を検証する）
    pub fn new(region: String, table_name: String) -> Result<Self, ConfigError> {
        if !is_valid_region(&region) {
            return Err(ConfigError::InvalidRegion(region));
        }
        Ok(Self { region, table_name })
    }

    /// 設定リージョンでAWS設定を読み込み、DynamoDBクライアントを作成
    pub async fn connect(&self) -> DynamoDbClient {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;
        DynamoDbClient::new(&aws_config)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// リージョン名がAWSリージョンの形式（例: `eu-west-1`, `us-gov-west-1`）かを判定
///
/// 先頭は2文字の英小文字、末尾は数字、その間は1つ以上の英小文字セグメント。
pub fn is_valid_region(region: &str) -> bool {
    let segments: Vec<&str> = region.split('-').collect();
    if segments.len() < 3 {
        return false;
    }

    let area = segments[0];
    let number = segments[segments.len() - 1];
    let middle = &segments[1..segments.len() - 1];

    area.len() == 2
        && area.chars().all(|c| c.is_ascii_lowercase())
        && !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit())
        && middle
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase()))
}

/// レスポンスに付与するCORS設定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorsConfig {
    allowed_origin: Option<String>,
}

impl CorsConfig {
    /// 環境変数から読み込む（空白のみの値は未設定扱い）
    pub fn from_env() -> Self {
        let allowed_origin = std::env::var(ENV_VAR_ALLOWED_ORIGIN)
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self { allowed_origin }
    }

    pub fn new(allowed_origin: Option<String>) -> Self {
        Self { allowed_origin }
    }

    pub fn allowed_origin(&self) -> Option<&str> {
        self.allowed_origin.as_deref()
    }
}
