// インフラストラクチャ層モジュール
pub mod clock;
pub mod config;
pub mod logging;
pub mod resource_repository;

// 再エクスポート
pub use clock::{format_timestamp, Clock, SystemClock};
pub use config::{ConfigError, CorsConfig, TableConfig};
pub use logging::{init_logging, request_span};
pub use resource_repository::{DynamoResourceRepository, RepositoryError, ResourceRepository};
