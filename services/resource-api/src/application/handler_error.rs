/// ハンドラー境界のエラー型
///
/// ワークフローの各段階で発生したエラーをステータスコードに対応付ける。
/// `Display`の出力がそのままレスポンスボディになる。
use lambda_http::http::StatusCode;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{DecodeError, EncodeError, ValidationError};
use crate::infrastructure::{ConfigError, RepositoryError};

use super::response::ResponseDescriptor;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HandlerError {
    /// 必須パラメータ不足、または未対応のHTTPメソッド
    #[error("Insufficient parameters")]
    InsufficientParameters,

    /// ボディのJSONパース/デコードに失敗
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// modify対象のリソースが存在しない
    #[error("Resource with identifier {0} not found")]
    ResourceNotFound(String),

    /// 保存済みレコードにcreatedDateがない（部分的に書き込まれた旧データ）
    #[error("Resource with identifier {0} has no createdDate in DB")]
    MissingCreatedDate(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl HandlerError {
    /// エラーに対応するHTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::InsufficientParameters
            | HandlerError::Decode(_)
            | HandlerError::Validation(_)
            | HandlerError::ResourceNotFound(_)
            | HandlerError::MissingCreatedDate(_) => StatusCode::BAD_REQUEST,
            HandlerError::Repository(_) | HandlerError::Encode(_) | HandlerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ログを出力してレスポンス記述子に変換
    pub fn into_response(self) -> ResponseDescriptor {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "リクエスト処理失敗");
        } else {
            info!(error = %self, status = status.as_u16(), "リクエスト拒否");
        }
        ResponseDescriptor::new(status, self.to_string())
    }
}
