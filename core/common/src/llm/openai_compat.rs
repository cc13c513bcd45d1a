//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。サンプリングパラメータは
//! 固定（ユーザー設定不可）。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;
use serde_json::{json, Value};
use std::env;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// 固定のサンプリングパラメータ
const MAX_OUTPUT_TOKENS: u32 = 15000;
const TEMPERATURE: f64 = 0.9;
const SAMPLE_COUNT: u32 = 1;

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key_env: Option<String>,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき "gpt-4o-mini"）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None または未設定のとき Authorization を付けない）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
    ) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            model,
            base_url,
            api_key_env,
        }
    }

    /// モデル名を返す
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key_env
            .as_ref()
            .and_then(|name| env::var(name).ok().map(|key| format!("Bearer {}", key)))
    }
}

impl CompletionProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": MAX_OUTPUT_TOKENS,
            "temperature": TEMPERATURE,
            "n": SAMPLE_COUNT,
            "stop": null
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = reqwest::blocking::Client::new()
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(auth) = self.auth_header() {
            builder = builder.header("Authorization", auth);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_request_payload_fixed_parameters() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let payload = p.make_request_payload("Hello").unwrap();
        assert_eq!(payload["model"], "gpt-4o-mini");
        assert_eq!(payload["max_tokens"], 15000);
        assert_eq!(payload["temperature"], 0.9);
        assert_eq!(payload["n"], 1);
        assert!(payload["stop"].is_null());
    }

    #[test]
    fn test_make_request_payload_single_user_message() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let payload = p.make_request_payload("What is 2 + 2?").unwrap();
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "What is 2 + 2?");
    }

    #[test]
    fn test_model_override() {
        let p = OpenAiCompatProvider::new(Some("gpt-4o".to_string()), None, None);
        assert_eq!(p.model(), "gpt-4o");
        let payload = p.make_request_payload("Hello").unwrap();
        assert_eq!(payload["model"], "gpt-4o");
    }

    #[test]
    fn test_url_joins_base_url() {
        let p = OpenAiCompatProvider::new(
            None,
            Some("https://api.example.com/v1/".to_string()),
            None,
        );
        assert_eq!(p.url(), "https://api.example.com/v1/chat/completions");
    }

    #[test]
    fn test_parse_response_text() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Step 1: add."}}]}"#;
        let text = p.parse_response_text(json).unwrap();
        assert_eq!(text.as_deref(), Some("Step 1: add."));
    }

    #[test]
    fn test_parse_response_text_zero_choices() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let json = r#"{"choices":[]}"#;
        let text = p.parse_response_text(json).unwrap();
        assert_eq!(text, None);
    }

    #[test]
    fn test_parse_response_text_null_content() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let json = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let text = p.parse_response_text(json).unwrap();
        assert_eq!(text, None);
    }

    #[test]
    fn test_parse_response_text_error_body() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let json = r#"{"error":{"message":"Incorrect API key provided"}}"#;
        let err = p.parse_response_text(json).unwrap_err();
        assert!(err.to_string().contains("Incorrect API key provided"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_parse_response_text_malformed_json() {
        let p = OpenAiCompatProvider::new(None, None, None);
        let err = p.parse_response_text("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse response JSON"));
    }
}
