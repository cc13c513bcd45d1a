//! 補完プロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// チャット補完プロバイダのトレイト
///
/// 本番実装は `OpenAiCompatProvider`。テストではこのトレイトを実装した
/// ダブルに差し替えられる。
pub trait CompletionProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// プロンプトからリクエストペイロードを生成
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - 生成に失敗した場合
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 送信・受信に失敗した場合
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// choices が空、または先頭 choice にテキストが無い場合は `Ok(None)`。
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
