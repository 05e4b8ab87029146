// Adapters layer: concrete implementations for external systems (chat endpoint, file storage).

pub mod http;
pub mod storage;

pub use http::HttpChatClient;
pub use storage::LocalStorage;
