use crate::domain::model::Product;
use crate::utils::error::{AppError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Why a filter produced nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    NoSearchMatches { term: String },
    NoMatchesInCategory { category: String, term: String },
    NoCategorySelected,
    EmptyCategory { category: String },
}

impl EmptyReason {
    pub fn message(&self) -> String {
        match self {
            EmptyReason::NoSearchMatches { term } => format!(
                "No products found matching \"{}\". Try a different search term or select a category first.",
                term
            ),
            EmptyReason::NoMatchesInCategory { category, term } => format!(
                "No products found in \"{}\" category matching \"{}\".",
                category, term
            ),
            EmptyReason::NoCategorySelected => "Select a category to view products".to_string(),
            EmptyReason::EmptyCategory { category } => {
                format!("No products found in the \"{}\" category.", category)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    Products(Vec<Product>),
    Empty(EmptyReason),
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 從 JSON 字串解析商品目錄 (`{"products": [...]}`)
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        tracing::debug!("Parsed catalog with {} products", file.products.len());
        Ok(Self::new(file.products))
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::ConfigError {
                message: format!("Cannot read product catalog '{}': {}", path.display(), e),
            }
        })?;
        Self::from_json_str(&content)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Filters by exact category and a case-insensitive search over
    /// name, brand, description and category.
    pub fn filter(&self, category: Option<&str>, search: &str) -> FilterOutcome {
        let category = category.filter(|c| !c.is_empty());
        let term = search.trim().to_lowercase();

        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| term.is_empty() || Self::matches_term(p, &term))
            .cloned()
            .collect();

        if !matches.is_empty() {
            return FilterOutcome::Products(matches);
        }

        let reason = match (category, term.is_empty()) {
            (None, false) => EmptyReason::NoSearchMatches { term },
            (Some(c), false) => EmptyReason::NoMatchesInCategory {
                category: c.to_string(),
                term,
            },
            (None, true) => EmptyReason::NoCategorySelected,
            (Some(c), true) => EmptyReason::EmptyCategory {
                category: c.to_string(),
            },
        };
        FilterOutcome::Empty(reason)
    }

    fn matches_term(product: &Product, term: &str) -> bool {
        [
            &product.name,
            &product.brand,
            &product.description,
            &product.category,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
    }
}
