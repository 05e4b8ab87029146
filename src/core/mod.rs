pub mod assistant;
pub mod catalog;
pub mod conversation;
pub mod formatter;
pub mod prompt;
pub mod render;
pub mod selection;

pub use crate::domain::model::{Citation, Message, Product, ProductDetails, Reply, Role};
pub use crate::domain::ports::{ChatClient, ConfigProvider, Storage};
pub use crate::utils::error::Result;
