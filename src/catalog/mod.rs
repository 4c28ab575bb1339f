// SPDX-License-Identifier: MPL-2.0
//! Product domain: the in-progress registration draft, digit-string
//! normalization for money/quantity fields, and the session product list.

pub mod draft;
pub mod numeric;
pub mod product;

pub use draft::DraftProduct;
pub use product::{InMemoryProductRepository, Product, ProductRepository};
