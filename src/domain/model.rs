use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub brand: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// The subset of a product that is shared with the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetails {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub input: String,
    #[serde(rename = "enableWebSearch")]
    pub enable_web_search: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    pub output_text: Option<String>,
    pub citations: Option<Vec<Citation>>,
}

impl ChatResponse {
    pub fn citations(&self) -> &[Citation] {
        self.citations.as_deref().unwrap_or(&[])
    }
}

/// A completed assistant turn: raw text plus the rendered HTML fragment.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub citations: Vec<Citation>,
    pub html: String,
}
