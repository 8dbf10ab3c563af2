// ドメイン層モジュール
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod file_metadata;
pub mod metadata;
pub mod resource;
pub mod validator;

// 再エクスポート
pub use decoder::{decode_resource, parse_body, DecodeError};
pub use encoder::{encode_resource, EncodeError};
pub use file_metadata::{collect_files, File, FileMetadata, Files};
pub use metadata::{Creator, Metadata};
pub use resource::{Resource, Shape};
pub use validator::{validate_for_insert, validate_for_modify, ValidationError};
