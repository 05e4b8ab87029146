use crate::domain::model::{Product, ProductDetails};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const SELECTION_KEY: &str = "loreal-selected-products";

/// Products picked for the routine, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    products: Vec<Product>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the saved selection. A missing or unreadable entry starts empty.
    pub async fn load<S: Storage>(storage: &S) -> Self {
        let saved = match storage.get_item(SELECTION_KEY).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!("Error loading selected products: {}", e);
                return Self::new();
            }
        };

        match saved.map(|json| serde_json::from_str::<Vec<Product>>(&json)) {
            Some(Ok(products)) => {
                tracing::debug!("Restored {} selected products", products.len());
                Self { products }
            }
            Some(Err(e)) => {
                tracing::error!("Error loading selected products: {}", e);
                Self::new()
            }
            None => Self::new(),
        }
    }

    pub async fn save<S: Storage>(&self, storage: &S) -> Result<()> {
        if self.products.is_empty() {
            return storage.remove_item(SELECTION_KEY).await;
        }
        let json = serde_json::to_string(&self.products)?;
        storage.set_item(SELECTION_KEY, &json).await
    }

    /// Adds the product, or removes it when already selected.
    /// Returns whether the product is selected afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.products.push(product.clone());
            true
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn details(&self) -> Vec<ProductDetails> {
        self.products.iter().map(ProductDetails::from).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Routine generation is only offered once something is selected.
    pub fn can_generate(&self) -> bool {
        !self.is_empty()
    }
}
