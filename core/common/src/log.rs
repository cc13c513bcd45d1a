//! ログ出力ポートと stderr アダプタ
//!
//! コンポーネントはグローバルなロガー設定に依存せず、`Log` トレイト
//! （能力）だけを受け取る。本番は `StderrLog`、テストは `MemoryLog` を使う。

use std::fmt;
use std::sync::Mutex;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// 表示用の大文字表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1 行分のログレコード
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
        }
    }

    /// エラーレベルのレコード
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }
}

/// `<timestamp> - <LEVEL> - <message>` 形式に整形する
pub fn format_record(record: &LogRecord) -> String {
    format!("{} - {} - {}", record.ts, record.level, record.message)
}

/// ログを出力するポート
pub trait Log {
    /// 1 レコードを書き出す
    fn log(&self, record: &LogRecord);
}

/// stderr へ 1 行ずつ出力するアダプタ
pub struct StderrLog;

impl StderrLog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) {
        eprintln!("{}", format_record(record));
    }
}

/// テスト用: レコードをメモリに蓄積するアダプタ
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// 蓄積したレコードのコピーを返す
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("log mutex poisoned").clone()
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) {
        self.records
            .lock()
            .expect("log mutex poisoned")
            .push(record.clone());
    }
}
