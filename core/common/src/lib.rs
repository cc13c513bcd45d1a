//! mathq共通ライブラリ
//!
//! `mathq`コマンドで使う基盤機能（エラー、ログ、LLMクライアント）を提供します。

/// エラーハンドリング
pub mod error;

/// ログ出力（stderr）
pub mod log;

/// LLMドライバーとプロバイダ
pub mod llm;
