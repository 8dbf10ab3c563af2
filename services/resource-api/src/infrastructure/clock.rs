/// 書き込みタイムスタンプ用の時計
///
/// modifiedDate/createdDateは常にサーバー時刻で設定するため、
/// 時刻の取得元をトレイトで差し替え可能にしておく。
use chrono::{DateTime, SecondsFormat, Utc};

/// 現在時刻の取得元
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// 現在時刻をレコード用のタイムスタンプ文字列として取得
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// システム時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// タイムスタンプをRFC 3339（マイクロ秒、`+00:00`）で整形
///
/// 固定幅のUTC表記なので辞書順が時刻順と一致し、ソートキーとして使える。
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
