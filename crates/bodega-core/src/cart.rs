//! # Shopping Cart
//!
//! The mutable cart, its line items, and the checkout routine.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Console Action           Cart API               State Change       │
//! │  ──────────────           ────────               ────────────       │
//! │                                                                     │
//! │  Add item ──────────────► add_item() ──────────► line += qty        │
//! │                                                  (or new line)      │
//! │  Update quantity ───────► update_quantity() ───► line.qty = n       │
//! │                                                  (0 deletes)        │
//! │  Remove item ───────────► remove_item() ───────► line -= qty        │
//! │                                                  (floor deletes)    │
//! │  View cart ─────────────► items() ─────────────► (read only)        │
//! │                                                                     │
//! │  Choose discount ───────► apply_discount() ────► policy replaced    │
//! │                                                                     │
//! │  Checkout ──────────────► checkout() ──────────► receipt produced,  │
//! │                                                  cart reset empty   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per distinct product name (repeat adds increment)
//! - Every line's quantity is > 0; a line that would reach zero is deleted
//! - Insertion order is preserved for stable display
//! - Checkout is an atomic compute-and-reset: the receipt is built, then
//!   the cart re-opens empty with [`Discount::None`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discount::Discount;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Design Notes
/// The product is a frozen snapshot: [`LineItem::from_product`] clones the
/// catalog entry, so the cart displays consistent data even if the catalog
/// product is changed after being added. Fields are private; the quantity
/// invariant (always > 0) is enforced by the cart's operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product snapshot at time of adding (frozen, owned)
    product: Product,

    /// Quantity in cart, always positive
    quantity: i64,

    /// When this line was first added to the cart
    added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new cart line from a product and quantity.
    ///
    /// ## Price Freezing
    /// The product (and its price) is captured at this moment. Later catalog
    /// changes do not reach lines already in the cart.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// The product name, which keys this line.
    #[inline]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// The frozen product snapshot.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the cart.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The frozen unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// When this line was first added.
    #[inline]
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// The undiscounted line subtotal (unit price × quantity).
    #[inline]
    pub fn base_subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// One cart per shopping session, constructed by the caller and passed
/// explicitly; there is no ambient global instance. Open for mutation until
/// [`Cart::checkout`], which prices the contents and re-opens the cart
/// empty.
#[derive(Debug, Default)]
pub struct Cart {
    /// Lines in the cart, in insertion order
    items: Vec<LineItem>,

    /// The active pricing policy; [`Discount::None`] until one is chosen
    discount: Discount,
}

impl Cart {
    /// Creates a new empty cart with no discount.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            discount: Discount::None,
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If the product name is already in the cart: increments its quantity
    /// - Otherwise: clones the product into a new line
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] if `quantity <= 0`
    /// - [`CoreError::QuantityTooLarge`] if the line would exceed
    ///   [`MAX_ITEM_QUANTITY`]
    /// - [`CoreError::CartTooLarge`] if a new line would exceed
    ///   [`MAX_CART_ITEMS`]
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        // Existing line: increment in place
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.name == product.name)
        {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes units of a product from the cart.
    ///
    /// ## Behavior
    /// - Removing at least the current quantity deletes the whole line
    /// - Otherwise the quantity is decremented
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] if `quantity <= 0`
    /// - [`CoreError::ProductNotFound`] if no line has that name; the cart
    ///   is left unchanged (recoverable, reported to the user)
    pub fn remove_item(&mut self, name: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        let Some(pos) = self.items.iter().position(|i| i.product.name == name) else {
            return Err(CoreError::ProductNotFound(name.to_string()));
        };

        if self.items[pos].quantity <= quantity {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity -= quantity;
        }
        Ok(())
    }

    /// Replaces the quantity of a line verbatim.
    ///
    /// ## Behavior
    /// - `quantity == 0` deletes the line
    /// - Negative quantities are rejected; a line never holds a
    ///   non-positive quantity
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] if `quantity < 0`
    /// - [`CoreError::QuantityTooLarge`] if above [`MAX_ITEM_QUANTITY`]
    /// - [`CoreError::ProductNotFound`] if no line has that name
    pub fn update_quantity(&mut self, name: &str, quantity: i64) -> CoreResult<()> {
        if quantity < 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        let Some(pos) = self.items.iter().position(|i| i.product.name == name) else {
            return Err(CoreError::ProductNotFound(name.to_string()));
        };

        if quantity == 0 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity = quantity;
        }
        Ok(())
    }

    /// A lazy, restartable, read-only view of the cart lines in insertion
    /// order. No mutation; call again to iterate again.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> + '_ {
        self.items.iter()
    }

    /// Replaces the active discount policy.
    ///
    /// Selecting a policy does not touch the stored lines; pricing happens
    /// exactly once, at [`Cart::checkout`]. Choosing a policy twice simply
    /// replaces the previous choice, it never compounds.
    pub fn apply_discount(&mut self, discount: Discount) {
        self.discount = discount;
    }

    /// The policy currently in effect.
    #[inline]
    pub fn active_discount(&self) -> &Discount {
        &self.discount
    }

    /// Finalizes the session: prices the lines under the active discount,
    /// produces a receipt, and re-opens the cart empty.
    ///
    /// Never fails; an empty cart yields a receipt with no lines and a
    /// total of zero. Afterwards the cart is empty and the discount is
    /// reset to [`Discount::None`].
    pub fn checkout(&mut self) -> Receipt {
        let adjusted = self.discount.adjusted_subtotals(&self.items);

        let lines: Vec<ReceiptLine> = self
            .items
            .iter()
            .zip(adjusted)
            .map(|(item, subtotal)| ReceiptLine {
                name: item.name().to_string(),
                quantity: item.quantity(),
                unit_price: item.unit_price(),
                subtotal,
            })
            .collect();

        let subtotal = self.subtotal();
        let total: Money = lines.iter().map(|line| line.subtotal).sum();

        let receipt = Receipt {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            lines,
            subtotal,
            discount_total: subtotal - total,
            total,
        };

        self.items.clear();
        self.discount = Discount::None;
        receipt
    }

    /// Clears all lines and resets the discount without producing a receipt.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = Discount::None;
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// The undiscounted subtotal (Σ price × quantity).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::base_subtotal).sum()
    }

    /// Totals under the active discount, for display before checkout.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    /// Undiscounted subtotal across all lines
    pub subtotal: Money,
    /// How much the active discount takes off
    pub discount_total: Money,
    /// Grand total under the active discount
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let total: Money = cart
            .discount
            .adjusted_subtotals(&cart.items)
            .into_iter()
            .sum();

        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            discount_total: subtotal - total,
            total,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One priced line on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product name at checkout (frozen)
    pub name: String,

    /// Units purchased
    pub quantity: i64,

    /// Unit price at checkout (frozen)
    pub unit_price: Money,

    /// Line subtotal after the active discount
    pub subtotal: Money,
}

/// The outcome of a checkout: structured data only. Rendering (currency
/// prefix, column layout) belongs to the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt identifier (UUID v4)
    pub id: String,

    /// When the checkout happened
    pub created_at: DateTime<Utc>,

    /// Priced lines, in cart insertion order
    pub lines: Vec<ReceiptLine>,

    /// Undiscounted subtotal across all lines
    pub subtotal: Money,

    /// How much the discount took off
    pub discount_total: Money,

    /// Grand total actually due
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductKind;

    fn test_product(name: &str, price: i64) -> Product {
        Product::new(
            name,
            Money::from_minor(price),
            true,
            ProductKind::Teabags {
                flavour: "Assam".to_string(),
            },
        )
        .unwrap()
    }

    fn quantities(cart: &Cart) -> Vec<(String, i64)> {
        cart.items()
            .map(|i| (i.name().to_string(), i.quantity()))
            .collect()
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_minor(400));
    }

    #[test]
    fn test_repeated_adds_sum_into_one_line() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();
        cart.add_item(&product, 1).unwrap();

        assert_eq!(cart.item_count(), 1); // still one line
        assert_eq!(quantities(&cart), vec![("Teabags".to_string(), 6)]);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        assert!(matches!(
            cart.add_item(&product, 0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        ));
        assert!(matches!(
            cart.add_item(&product, -2),
            Err(CoreError::InvalidQuantity { requested: -2 })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_enforces_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        assert!(cart.add_item(&product, MAX_ITEM_QUANTITY).is_ok());
        assert!(matches!(
            cart.add_item(&product, 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        // Fresh line over the cap is rejected up front
        let other = test_product("Laptop", 10000);
        assert!(matches!(
            cart.add_item(&other, MAX_ITEM_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_add_enforces_cart_size_cap() {
        let mut cart = Cart::new();
        for n in 0..MAX_CART_ITEMS {
            let product = test_product(&format!("Product {n}"), 100);
            cart.add_item(&product, 1).unwrap();
        }

        let overflow = test_product("One Too Many", 100);
        assert!(matches!(
            cart.add_item(&overflow, 1),
            Err(CoreError::CartTooLarge { .. })
        ));
    }

    #[test]
    fn test_cart_snapshots_product_on_add() {
        let mut cart = Cart::new();
        let mut product = test_product("Teabags", 200);

        cart.add_item(&product, 1).unwrap();
        product.price = Money::from_minor(9999); // catalog change after add

        let line = cart.items().next().unwrap();
        assert_eq!(line.unit_price(), Money::from_minor(200));
    }

    #[test]
    fn test_remove_decrements() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 5).unwrap();
        cart.remove_item("Teabags", 2).unwrap();

        assert_eq!(quantities(&cart), vec![("Teabags".to_string(), 3)]);
    }

    #[test]
    fn test_remove_at_or_above_quantity_deletes_line() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 2).unwrap();
        cart.remove_item("Teabags", 2).unwrap();
        assert!(cart.items().all(|i| i.name() != "Teabags"));
        assert!(cart.is_empty());

        cart.add_item(&product, 2).unwrap();
        cart.remove_item("Teabags", 5).unwrap(); // more than present
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_is_not_found_and_cart_unchanged() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);
        cart.add_item(&product, 2).unwrap();

        let err = cart.remove_item("Laptop", 1);
        assert!(matches!(err, Err(CoreError::ProductNotFound(name)) if name == "Laptop"));
        assert_eq!(quantities(&cart), vec![("Teabags".to_string(), 2)]);
    }

    #[test]
    fn test_remove_then_add_restores_quantity() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 5).unwrap();
        cart.remove_item("Teabags", 2).unwrap();
        cart.add_item(&product, 2).unwrap();

        assert_eq!(quantities(&cart), vec![("Teabags".to_string(), 5)]);
    }

    #[test]
    fn test_update_quantity_replaces_verbatim() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 2).unwrap();
        cart.update_quantity("Teabags", 7).unwrap();

        assert_eq!(quantities(&cart), vec![("Teabags".to_string(), 7)]);
    }

    #[test]
    fn test_update_quantity_zero_deletes_line() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 2).unwrap();
        cart.update_quantity("Teabags", 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_rejects_negative() {
        let mut cart = Cart::new();
        let product = test_product("Teabags", 200);

        cart.add_item(&product, 2).unwrap();
        assert!(matches!(
            cart.update_quantity("Teabags", -1),
            Err(CoreError::InvalidQuantity { requested: -1 })
        ));
        assert_eq!(quantities(&cart), vec![("Teabags".to_string(), 2)]);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.update_quantity("Laptop", 3),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_items_view_is_restartable_and_ordered() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("Laptop", 10000), 1).unwrap();
        cart.add_item(&test_product("Teabags", 200), 2).unwrap();
        cart.add_item(&test_product("Headphones", 500), 1).unwrap();

        let first: Vec<&str> = cart.items().map(LineItem::name).collect();
        let second: Vec<&str> = cart.items().map(LineItem::name).collect();
        assert_eq!(first, vec!["Laptop", "Teabags", "Headphones"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_checkout_prices_lines_and_resets() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("A", 10000), 2).unwrap();
        cart.add_item(&test_product("B", 500), 1).unwrap();

        let receipt = cart.checkout();

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].name, "A");
        assert_eq!(receipt.lines[0].subtotal, Money::from_minor(20000));
        assert_eq!(receipt.lines[1].name, "B");
        assert_eq!(receipt.lines[1].subtotal, Money::from_minor(500));
        assert_eq!(receipt.subtotal, Money::from_minor(20500));
        assert_eq!(receipt.discount_total, Money::zero());
        assert_eq!(receipt.total, Money::from_minor(20500));

        // Cart is single-use per session: checkout re-opens it empty
        assert!(cart.is_empty());
        assert_eq!(*cart.active_discount(), Discount::None);
    }

    #[test]
    fn test_checkout_empty_cart_yields_zero_total() {
        let mut cart = Cart::new();
        let receipt = cart.checkout();

        assert!(receipt.lines.is_empty());
        assert_eq!(receipt.total, Money::zero());
        assert!(!receipt.id.is_empty());
    }

    #[test]
    fn test_checkout_applies_percentage_once() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("A", 1000), 1).unwrap();
        cart.add_item(&test_product("B", 500), 1).unwrap();

        let discount = Discount::percentage(10).unwrap();
        // Selecting repeatedly must not compound: pricing happens at checkout
        cart.apply_discount(discount);
        cart.apply_discount(discount);

        let receipt = cart.checkout();
        assert_eq!(receipt.lines[0].subtotal, Money::from_minor(850));
        assert_eq!(receipt.lines[1].subtotal, Money::from_minor(350));
        assert_eq!(receipt.discount_total, Money::from_minor(300));
        assert_eq!(receipt.total, Money::from_minor(1200));
    }

    #[test]
    fn test_checkout_applies_bogo() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("A", 100), 4).unwrap();
        cart.apply_discount(Discount::BuyOneGetOneFree);

        let receipt = cart.checkout();
        assert_eq!(receipt.lines[0].subtotal, Money::from_minor(200));
        assert_eq!(receipt.total, Money::from_minor(200));
    }

    #[test]
    fn test_discount_resets_after_checkout() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);

        cart.add_item(&product, 1).unwrap();
        cart.apply_discount(Discount::percentage(50).unwrap());
        let discounted = cart.checkout();
        assert_eq!(discounted.total, Money::from_minor(500));

        // Next session on the same cart is undiscounted
        cart.add_item(&product, 1).unwrap();
        let plain = cart.checkout();
        assert_eq!(plain.total, Money::from_minor(1000));
    }

    #[test]
    fn test_totals_preview_matches_active_discount() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("A", 1000), 1).unwrap();
        cart.add_item(&test_product("B", 500), 1).unwrap();
        cart.apply_discount(Discount::percentage(10).unwrap());

        let totals = cart.totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal, Money::from_minor(1500));
        assert_eq!(totals.discount_total, Money::from_minor(300));
        assert_eq!(totals.total, Money::from_minor(1200));

        // Preview does not consume the cart
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("A", 1000), 1).unwrap();
        cart.apply_discount(Discount::BuyOneGetOneFree);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(*cart.active_discount(), Discount::None);
    }

    #[test]
    fn test_receipt_serializes_to_json() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("Teabags", 200), 2).unwrap();
        let receipt = cart.checkout();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["lines"][0]["name"], "Teabags");
        assert_eq!(json["lines"][0]["quantity"], 2);
        assert_eq!(json["lines"][0]["unit_price"], 200);
        assert_eq!(json["lines"][0]["subtotal"], 400);
        assert_eq!(json["total"], 400);
    }
}
