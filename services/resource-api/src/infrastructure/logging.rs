/// ログ基盤モジュール
///
/// Lambda/CloudWatch向けにJSON形式の構造化ログを出力する。
/// 各ハンドラーの呼び出しは`request`スパンの中で実行する。
use std::sync::Once;

use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// `RUST_LOG`でフィルタ（未設定時はinfo）。複数回呼び出しても初回のみ初期化する。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .init();
    });
}

/// 1回のハンドラー呼び出しを表すスパンを作成
///
/// # Arguments
/// * `handler` - ハンドラー名（`fetch_resource`など）
/// * `http_method` - リクエストのHTTPメソッド（不明な場合はNone）
/// * `identifier` - パスパラメータの識別子（不明な場合はNone）
pub fn request_span(
    handler: &'static str,
    http_method: Option<&str>,
    identifier: Option<&str>,
) -> Span {
    tracing::info_span!(
        "request",
        handler = handler,
        http_method = http_method.unwrap_or("unknown"),
        resource_identifier = identifier.unwrap_or("unknown"),
    )
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
