//! # Product Types
//!
//! The purchasable item model.
//!
//! ## Variant Modelling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Product                                   │
//! │                                                                     │
//! │   name ──────── unique catalog key (cart lines are keyed by it)     │
//! │   price ─────── non-negative Money                                  │
//! │   available ─── advisory flag; enforced by the console at add time  │
//! │   kind ──────── ProductKind (variant-specific attributes)           │
//! │                  ├── Laptop      { ram_gb }                         │
//! │                  ├── Headphones  { noise_cancelling }               │
//! │                  └── Teabags     { flavour }                        │
//! │                                                                     │
//! │   Variant attributes are descriptive only: pricing never reads them │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Prototype Copies
//! `Product` derives `Clone`; a clone is value-equal to the source and
//! independently owned. The cart relies on this to snapshot a catalog entry
//! on insert: mutating the catalog afterwards never reaches into the cart.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Product Kind
// =============================================================================

/// Variant-specific product attributes.
///
/// Replaces a class-per-variant hierarchy with a tagged union: dispatch is
/// by variant, and each variant carries its own descriptive payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// A laptop with its installed memory.
    Laptop { ram_gb: u32 },

    /// Headphones, with or without active noise cancelling.
    Headphones { noise_cancelling: bool },

    /// A box of teabags in a particular flavour.
    Teabags { flavour: String },
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name; unique across the catalog and used as the cart's
    /// line-item key.
    pub name: String,

    /// Unit price in minor currency units.
    pub price: Money,

    /// Whether the product can currently be sold. The console rejects
    /// unavailable products before they reach the cart.
    pub available: bool,

    /// Variant-specific attributes.
    pub kind: ProductKind,
}

impl Product {
    /// Creates a product, validating name and price.
    ///
    /// ## Rules
    /// - `name` must be non-empty after trimming (stored trimmed)
    /// - `price` must be non-negative
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::{Money, Product, ProductKind};
    ///
    /// let tea = Product::new(
    ///     "Teabags",
    ///     Money::from_minor(200),
    ///     true,
    ///     ProductKind::Teabags { flavour: "Masala Chai".to_string() },
    /// )
    /// .unwrap();
    /// assert_eq!(tea.name, "Teabags");
    ///
    /// assert!(Product::new("", Money::zero(), true, ProductKind::Laptop { ram_gb: 8 }).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        available: bool,
        kind: ProductKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            name: name.trim().to_string(),
            price,
            available,
            kind,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
