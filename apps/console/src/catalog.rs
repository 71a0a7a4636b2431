//! # Static Product Catalog
//!
//! The catalog is supplied by the console at startup; the core does not own
//! catalog management. Products are cloned into the cart on add, so this
//! list stays pristine for the whole session.

use bodega_core::{Money, Product, ProductKind, ValidationError};

/// Builds the demo catalog, in display order.
///
/// Product names are unique; the cart keys its lines by them. One entry is
/// deliberately unavailable so the add flow's rejection path is reachable
/// from the menu.
pub fn default_catalog() -> Result<Vec<Product>, ValidationError> {
    Ok(vec![
        Product::new(
            "Laptop",
            Money::from_minor(10000),
            true,
            ProductKind::Laptop { ram_gb: 16 },
        )?,
        Product::new(
            "Headphones",
            Money::from_minor(500),
            true,
            ProductKind::Headphones {
                noise_cancelling: true,
            },
        )?,
        Product::new(
            "Teabags",
            Money::from_minor(200),
            true,
            ProductKind::Teabags {
                flavour: "Masala Chai".to_string(),
            },
        )?,
        Product::new(
            "Refurbished Laptop",
            Money::from_minor(7500),
            false,
            ProductKind::Laptop { ram_gb: 8 },
        )?,
    ])
}

/// One-line description of the variant-specific attribute, for listings.
pub fn describe_kind(kind: &ProductKind) -> String {
    match kind {
        ProductKind::Laptop { ram_gb } => format!("{ram_gb}GB RAM"),
        ProductKind::Headphones { noise_cancelling } => {
            if *noise_cancelling {
                "noise cancelling".to_string()
            } else {
                "no noise cancelling".to_string()
            }
        }
        ProductKind::Teabags { flavour } => format!("{flavour} flavour"),
    }
}
