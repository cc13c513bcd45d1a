//! 補完ドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → 送信 → テキスト抽出）。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;

/// 補完ドライバー
pub struct CompletionDriver<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> CompletionDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを送信してレスポンステキストを取得
    ///
    /// # Returns
    /// * `Ok(Some(String))` - 先頭 choice のテキスト
    /// * `Ok(None)` - レスポンスに使える choice が無い
    /// * `Err(Error)` - 送信・パースに失敗した場合
    pub fn complete(&self, prompt: &str) -> Result<Option<String>, Error> {
        let payload = self.provider.make_request_payload(prompt)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        self.provider.parse_response_text(&response_json)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
