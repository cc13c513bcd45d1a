//! テスト用: 固定レスポンスを返す CompletionProvider 実装

#[cfg(test)]
mod stub {
    use common::error::Error;
    use common::llm::CompletionProvider;
    use serde_json::{json, Value};

    /// テスト用: 固定レスポンスを返す Stub
    pub struct StubProvider {
        response: Result<String, String>,
    }

    impl StubProvider {
        /// content を 1 choice で返す
        pub fn with_content(content: &str) -> Self {
            let body = json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            });
            Self {
                response: Ok(body.to_string()),
            }
        }

        /// choices が空のレスポンスを返す
        pub fn empty_choices() -> Self {
            Self {
                response: Ok(r#"{"choices":[]}"#.to_string()),
            }
        }

        /// HTTPリクエストを失敗させる
        pub fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
            }
        }
    }

    impl CompletionProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
            Ok(json!({
                "messages": [{ "role": "user", "content": prompt }]
            }))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(msg) => Err(Error::http(msg.clone())),
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
            let text = v["choices"][0]["message"]["content"]
                .as_str()
                .map(|s| s.to_string());
            Ok(text)
        }
    }
}

#[cfg(test)]
pub use stub::StubProvider;
