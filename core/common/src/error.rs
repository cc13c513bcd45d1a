//! エラーハンドリング
//!
//! 終了コードは sysexits 相当（64 = 引数不正、74 = I/O・プロトコル）。

use thiserror::Error as ThisError;

/// エラー型
///
/// 種別ごとにコンストラクタヘルパーを用意し、`exit_code()` で終了コードに変換する。
#[derive(Debug, ThisError)]
pub enum Error {
    /// コマンドライン引数の不正
    #[error("{0}")]
    InvalidArgument(String),
    /// HTTPリクエスト・レスポンスの失敗
    #[error("{0}")]
    Http(String),
    /// JSONのシリアライズ・パース失敗
    #[error("{0}")]
    Json(String),
    /// 標準出力などへの書き込み失敗
    #[error("{0}")]
    Io(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// HTTPエラー
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// JSONエラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// I/Oエラー
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Http(_) | Self::Json(_) | Self::Io(_) => 74,
        }
    }

    /// usage 表示が必要なエラーか（main が判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
