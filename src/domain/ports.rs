use crate::domain::model::ChatResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Key/value persistence in the shape of browser local storage.
pub trait Storage: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_item(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn products_path(&self) -> &str;
    fn state_dir(&self) -> &str;
    fn web_search_enabled(&self) -> bool;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, input: &str) -> Result<ChatResponse>;
}
