// SPDX-License-Identifier: MPL-2.0
//! Registered products and the session-scoped repository.
//!
//! The repository is a capability seam: the wizard and the product list
//! only see the trait, so the in-memory store can later be swapped for a
//! networked backend without touching either screen.

use super::numeric;
use std::path::PathBuf;

/// A product visible on the My Products screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    /// Raw digit string, same convention as the draft.
    pub price: String,
    pub description: String,
    pub image: Option<PathBuf>,
}

impl Product {
    pub fn display_price(&self) -> String {
        numeric::format_grouped(&self.price)
    }
}

/// Where registered products end up. Session-scoped; nothing survives a
/// process restart.
pub trait ProductRepository {
    fn list(&self) -> &[Product];
    fn add(&mut self, product: Product);
}

/// In-memory store seeded with demo inventory.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the demo inventory shown before any registration happens.
    pub fn with_sample_products() -> Self {
        Self {
            products: vec![
                Product {
                    name: "키보드".to_string(),
                    price: "35000".to_string(),
                    description: "기계식 키보드".to_string(),
                    image: None,
                },
                Product {
                    name: "마우스".to_string(),
                    price: "15000".to_string(),
                    description: "무선 마우스".to_string(),
                    image: None,
                },
                Product {
                    name: "모니터".to_string(),
                    price: "250000".to_string(),
                    description: "27인치 모니터".to_string(),
                    image: None,
                },
            ],
        }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> &[Product] {
        &self.products
    }

    fn add(&mut self, product: Product) {
        self.products.push(product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_repository_has_three_products() {
        let repo = InMemoryProductRepository::with_sample_products();
        assert_eq!(repo.list().len(), 3);
        assert_eq!(repo.list()[0].display_price(), "35,000");
    }

    #[test]
    fn add_appends_to_the_list() {
        let mut repo = InMemoryProductRepository::new();
        repo.add(Product {
            name: "헤드폰".to_string(),
            price: "89000".to_string(),
            description: String::new(),
            image: None,
        });
        assert_eq!(repo.list().len(), 1);
        assert_eq!(repo.list()[0].name, "헤드폰");
    }
}
