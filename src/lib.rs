pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};
pub use crate::config::{toml_config::TomlConfig, Overrides, Settings};

pub use crate::adapters::{HttpChatClient, LocalStorage};
pub use crate::core::{
    assistant::Assistant,
    catalog::{Catalog, EmptyReason, FilterOutcome},
    conversation::Conversation,
    formatter::format_chat_text,
    selection::Selection,
};
pub use crate::utils::error::{AppError, Result};
