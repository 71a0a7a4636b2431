//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of Bodega. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bodega Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  Console App (apps/console)                   │ │
//! │  │    Menu Loop ──► Input Parsing ──► Currency Formatting        │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ bodega-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────┐ ┌───────────┐ │ │
//! │  │  │  money  │ │ product │ │ discount │ │ cart │ │validation │ │ │
//! │  │  │  Money  │ │ Product │ │ Discount │ │ Cart │ │  rules    │ │ │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └──────┘ └───────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                        │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product and its variant attributes
//! - [`discount`] - Discount policies (none, percentage, buy-one-get-one-free)
//! - [`cart`] - The shopping cart, totals, and checkout receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic for cart math;
//!    only receipt ids and timestamps draw on the clock/randomness
//! 2. **No I/O**: Console, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are integer minor units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::{Cart, Discount, Money, Product, ProductKind};
//!
//! let laptop = Product::new(
//!     "Laptop",
//!     Money::from_minor(10000),
//!     true,
//!     ProductKind::Laptop { ram_gb: 16 },
//! )
//! .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(&laptop, 2).unwrap();
//! cart.apply_discount(Discount::BuyOneGetOneFree);
//!
//! let receipt = cart.checkout();
//! assert_eq!(receipt.total, Money::from_minor(10000)); // second unit free
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Cart` instead of
// `use bodega_core::cart::Cart`

pub use cart::{Cart, CartTotals, LineItem, Receipt, ReceiptLine};
pub use discount::{Discount, Percentage};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps a single session's receipt readable.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
