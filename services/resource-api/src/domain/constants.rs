/// ハンドラー・エンコーダー・ストアで共有する定数
///
/// イベント/レスポンスのキー名、永続化レコードのフィールド名、
/// HTTPメソッド名、環境変数名をまとめて定義する。

// ==================== リクエスト記述子のキー ====================

/// HTTPメソッドのキー
pub const EVENT_HTTP_METHOD: &str = "httpMethod";
/// リクエストボディのキー
pub const EVENT_BODY: &str = "body";
/// パスパラメータのキー
pub const EVENT_PATH_PARAMETERS: &str = "pathParameters";
/// パスパラメータ内の識別子のキー
pub const EVENT_PATH_PARAMETER_IDENTIFIER: &str = "identifier";
/// リクエストボディのエンベロープキー（`{"resource": {...}}`）
pub const EVENT_RESOURCE_ENVELOPE: &str = "resource";

// ==================== レスポンス記述子のキー ====================

pub const RESPONSE_STATUS_CODE: &str = "statusCode";
pub const RESPONSE_BODY: &str = "body";
pub const RESPONSE_HEADERS: &str = "headers";

// ==================== 永続化レコードのフィールド名 ====================

/// パーティションキー
pub const FIELD_RESOURCE_IDENTIFIER: &str = "resource_identifier";
/// ソートキー
pub const FIELD_MODIFIED_DATE: &str = "modifiedDate";
pub const FIELD_CREATED_DATE: &str = "createdDate";
pub const FIELD_METADATA: &str = "metadata";
pub const FIELD_FILES: &str = "files";
pub const FIELD_OWNER: &str = "owner";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_PUBLISHED_DATE: &str = "publishedDate";
pub const FIELD_INDEXED_DATE: &str = "indexedDate";

// ==================== クエリ結果のキー ====================

pub const RESULT_ITEMS: &str = "Items";
pub const RESULT_COUNT: &str = "Count";

// ==================== HTTP ====================

pub const HTTP_METHOD_GET: &str = "GET";
pub const HTTP_METHOD_POST: &str = "POST";
pub const HTTP_METHOD_PUT: &str = "PUT";

/// CORSヘッダー名
pub const HEADER_ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

// ==================== 環境変数名 ====================

pub const ENV_VAR_REGION: &str = "REGION";
pub const ENV_VAR_TABLE_NAME: &str = "TABLE_NAME";
pub const ENV_VAR_ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";

// ==================== エラーメッセージ ====================

/// 必須パラメータ不足時のレスポンスボディ
pub const ERROR_INSUFFICIENT_PARAMETERS: &str = "Insufficient parameters";
