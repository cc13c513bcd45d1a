//! 配線: 標準アダプタでプロセッサを組み立てる

use std::sync::Arc;

use common::llm::OpenAiCompatProvider;
use common::log::{Log, StderrLog};

use crate::usecase::MathQuestionProcessor;

/// API キーを読む環境変数名（未設定なら Authorization を付けずに送る）
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 組み立て済みアプリケーション
pub struct App {
    pub processor: MathQuestionProcessor<OpenAiCompatProvider>,
}

/// 標準アダプタ（OpenAI 互換プロバイダ + stderr ログ）で組み立てる
///
/// モデルはデフォルト（gpt-4o-mini）。CLI からは変更できない。
pub fn wire() -> App {
    let provider = OpenAiCompatProvider::new(None, None, Some(API_KEY_ENV.to_string()));
    let logger: Arc<dyn Log> = Arc::new(StderrLog::new());
    App {
        processor: MathQuestionProcessor::new(provider, logger),
    }
}
