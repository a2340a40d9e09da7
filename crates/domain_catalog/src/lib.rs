//! Product Catalog Domain
//!
//! This crate holds the authoritative, versioned definition of every ratable
//! Hero product and exposes read-only lookup. It is a leaf crate with no
//! dependencies on the rating logic: pricing formulas live in
//! `domain_rating`, keyed by the product ids declared here, so catalog
//! content and pricing code stay separately versionable.
//!
//! # Immutability
//!
//! Catalog entries are compiled in and never mutated at runtime. Changing a
//! coverage option or adding a product means shipping a new catalog, not
//! writing through some runtime path - by construction there is no `&mut`
//! accessor to the underlying map.
//!
//! # Example
//!
//! ```rust
//! use domain_catalog::{get_product, list_products};
//!
//! let product = get_product("hero-auto-advantage").expect("known product");
//! assert_eq!(product.coverage_options.len(), 3);
//! assert!(get_product("not-a-real-id").is_none());
//! assert!(list_products().len() >= 4);
//! ```

pub mod catalog;
pub mod product;

pub use catalog::{get_product, list_products, product_ids};
pub use product::{ClaimsProcess, CoverageOption, ProductCategory, ProductDefinition};
