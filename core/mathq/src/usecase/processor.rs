//! 数学の質問を擬似アルゴリズムに変換するプロセッサ

use std::sync::Arc;

use common::llm::{CompletionDriver, CompletionProvider};
use common::log::{Log, LogRecord};

/// プロンプトの固定指示文
const PROMPT_PREAMBLE: &str =
    "Please provide a step-by-step pseudo-algorithm using chain of thoughts for the following mathematical problem:";

/// 指示文と質問からプロンプトを組み立てる
///
/// 質問は空文字列でもそのまま埋め込む。
pub fn build_prompt(question: &str) -> String {
    format!("{}\n\n{}", PROMPT_PREAMBLE, question)
}

/// 数学の質問プロセッサ
///
/// 1 回の呼び出しで 1 リクエストだけを発行する。失敗はすべてエラーログに
/// 落とし、呼び出し元には `None` として返す（失敗原因は区別しない）。
pub struct MathQuestionProcessor<P: CompletionProvider> {
    driver: CompletionDriver<P>,
    logger: Arc<dyn Log>,
}

impl<P: CompletionProvider> MathQuestionProcessor<P> {
    /// 新しいプロセッサを作成
    pub fn new(provider: P, logger: Arc<dyn Log>) -> Self {
        Self {
            driver: CompletionDriver::new(provider),
            logger,
        }
    }

    /// 質問から擬似アルゴリズムを生成する
    ///
    /// # Returns
    /// * `Some(String)` - 先頭 choice のテキスト（前後の空白を除去）
    /// * `None` - choice が無い、または送信・パースに失敗した場合
    pub fn generate(&self, question: &str) -> Option<String> {
        let prompt = build_prompt(question);
        match self.driver.complete(&prompt) {
            Ok(Some(text)) => Some(text.trim().to_string()),
            Ok(None) => {
                self.log_error("No response received from the API.");
                None
            }
            Err(e) => {
                self.log_error(&format!(
                    "An error occurred while generating pseudo-algorithm: {}",
                    e
                ));
                None
            }
        }
    }

    fn log_error(&self, message: &str) {
        self.logger.log(&LogRecord::error(message));
    }
}
