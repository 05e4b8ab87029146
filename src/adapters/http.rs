use crate::domain::model::{ChatRequest, ChatResponse};
use crate::domain::ports::{ChatClient, ConfigProvider};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the remote chat endpoint: `POST {input, enableWebSearch}` → `{output_text, citations}`.
pub struct HttpChatClient {
    endpoint: String,
    enable_web_search: bool,
    client: Client,
}

impl HttpChatClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            endpoint: config.api_endpoint().to_string(),
            enable_web_search: config.web_search_enabled(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn complete(&self, input: &str) -> Result<ChatResponse> {
        let request = ChatRequest {
            input: input.to_string(),
            enable_web_search: self.enable_web_search,
        };

        tracing::debug!(
            "Making API request to: {} ({} chars, web search: {})",
            self.endpoint,
            input.len(),
            self.enable_web_search
        );
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(AppError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: ChatResponse = serde_json::from_str(&body)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        api_endpoint: String,
        web_search: bool,
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn products_path(&self) -> &str {
            "products.json"
        }

        fn state_dir(&self) -> &str {
            "state"
        }

        fn web_search_enabled(&self) -> bool {
            self.web_search
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }
    }

    fn client_for(server: &MockServer, web_search: bool) -> HttpChatClient {
        HttpChatClient::new(&MockConfig {
            api_endpoint: server.url("/"),
            web_search,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_posts_input_and_web_search_flag() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .json_body(serde_json::json!({
                    "input": "hello",
                    "enableWebSearch": false
                }));
            then.status(200).json_body(serde_json::json!({
                "output_text": "hi there",
                "citations": [{"url": "https://a.example", "title": "A"}]
            }));
        })
        .await;

        let response = client_for(&server, false).complete("hello").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.output_text.as_deref(), Some("hi there"));
        assert_eq!(response.citations().len(), 1);
        assert_eq!(response.citations()[0].title, "A");
    }

    #[tokio::test]
    async fn test_missing_citations_default_to_empty() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .json_body(serde_json::json!({ "output_text": "ok", "citations": null }));
        })
        .await;

        let response = client_for(&server, true).complete("x").await.unwrap();
        assert!(response.citations().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(502);
        })
        .await;

        let err = client_for(&server, true).complete("x").await.unwrap_err();
        assert!(matches!(err, AppError::HttpStatusError { status: 502 }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_serialization_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200).body("<html>oops</html>");
        })
        .await;

        let err = client_for(&server, true).complete("x").await.unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
