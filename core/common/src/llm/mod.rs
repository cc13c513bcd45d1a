//! LLMドライバーとプロバイダの実装
//!
//! チャット補完 1 往復に必要な共通処理を提供します。

pub mod driver;
pub mod openai_compat;
pub mod provider;

pub use driver::CompletionDriver;
pub use openai_compat::OpenAiCompatProvider;
pub use provider::CompletionProvider;
