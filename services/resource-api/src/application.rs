// アプリケーション層モジュール
pub mod fetch_handler;
pub mod handler_error;
pub mod insert_handler;
pub mod modify_handler;
pub mod request;
pub mod response;

// 再エクスポート
pub use fetch_handler::FetchHandler;
pub use handler_error::HandlerError;
pub use insert_handler::InsertHandler;
pub use modify_handler::{merge_for_update, ModifyHandler};
pub use request::RequestDescriptor;
pub use response::ResponseDescriptor;
