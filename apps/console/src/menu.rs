//! # Menu Loop
//!
//! The interactive shopping session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Console Session                               │
//! │                                                                     │
//! │  Print catalog                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─► Print menu ──► Read choice ──► Dispatch ─┐                     │
//! │  │                                            │                     │
//! │  └────────────────────────────────────────────┘                     │
//! │                                                                     │
//! │  1 Add item ───────► Cart::add_item      (availability checked      │
//! │  2 Update quantity ► Cart::update_quantity          here first)     │
//! │  3 Remove item ────► Cart::remove_item                              │
//! │  4 View cart ──────► Cart::items + Cart::totals                     │
//! │  5 Choose discount ► Cart::apply_discount                           │
//! │  6 Checkout ───────► Cart::checkout → render receipt                │
//! │  7 Exit                                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All parsing happens here: the core only ever receives well-typed
//! arguments. Recoverable core errors are printed and the loop continues.

use std::io::{self, Write};

use bodega_core::{Cart, Discount, Product, Receipt};
use tracing::{debug, info};

use crate::catalog::describe_kind;
use crate::config::ConsoleConfig;

/// Runs the menu loop until the user exits or stdin closes.
pub fn run(config: &ConsoleConfig, catalog: &[Product], cart: &mut Cart) -> io::Result<()> {
    print!("{}", render_catalog(config, catalog));

    loop {
        println!();
        println!("Options:");
        println!("1. Add item to cart");
        println!("2. Update item quantity in cart");
        println!("3. Remove item from cart");
        println!("4. View cart");
        println!("5. Choose discount");
        println!("6. Checkout");
        println!("7. Exit");

        let Some(choice) = prompt("Enter your choice: ")? else {
            break; // stdin closed
        };

        match choice.as_str() {
            "1" => handle_add(catalog, cart)?,
            "2" => handle_update(catalog, cart)?,
            "3" => handle_remove(catalog, cart)?,
            "4" => handle_view(config, cart),
            "5" => handle_discount(cart)?,
            "6" => handle_checkout(config, cart),
            "7" => break,
            _ => println!("Invalid choice. Please select a valid option."),
        }
    }

    Ok(())
}

// =============================================================================
// Input Helpers
// =============================================================================

/// Prints a prompt and reads one trimmed line. `None` means stdin closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for a catalog entry by its 1-based display number.
///
/// Prints the appropriate message and returns `None` for malformed input,
/// out-of-range numbers, or closed stdin.
fn prompt_catalog_index(catalog: &[Product], label: &str) -> io::Result<Option<usize>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };

    let Ok(number) = raw.parse::<usize>() else {
        println!("Invalid input. Please enter a valid number.");
        return Ok(None);
    };

    if number < 1 || number > catalog.len() {
        println!("Invalid product number.");
        return Ok(None);
    }

    Ok(Some(number - 1))
}

/// Prompts for an integer quantity. Malformed input is reported here;
/// range rules are the core's.
fn prompt_quantity(label: &str) -> io::Result<Option<i64>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };

    let Ok(quantity) = raw.parse::<i64>() else {
        println!("Invalid input. Please enter a valid number.");
        return Ok(None);
    };

    Ok(Some(quantity))
}

// =============================================================================
// Menu Handlers
// =============================================================================

fn handle_add(catalog: &[Product], cart: &mut Cart) -> io::Result<()> {
    let Some(index) = prompt_catalog_index(catalog, "Enter the product number to add to cart: ")?
    else {
        return Ok(());
    };
    let product = &catalog[index];

    // Availability is enforced here, before the cart ever sees the product
    if !product.available {
        println!("{} is not available.", product.name);
        return Ok(());
    }

    let Some(quantity) = prompt_quantity("Enter the quantity: ")? else {
        return Ok(());
    };

    debug!(product = %product.name, quantity, "add_to_cart");
    match cart.add_item(product, quantity) {
        Ok(()) => println!("{} {} added to cart.", quantity, product.name),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn handle_update(catalog: &[Product], cart: &mut Cart) -> io::Result<()> {
    let Some(index) =
        prompt_catalog_index(catalog, "Enter the product number to update quantity: ")?
    else {
        return Ok(());
    };
    let product = &catalog[index];

    let Some(quantity) = prompt_quantity("Enter the new quantity: ")? else {
        return Ok(());
    };

    debug!(product = %product.name, quantity, "update_quantity");
    match cart.update_quantity(&product.name, quantity) {
        Ok(()) => println!("{} quantity updated in cart.", product.name),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn handle_remove(catalog: &[Product], cart: &mut Cart) -> io::Result<()> {
    let Some(index) =
        prompt_catalog_index(catalog, "Enter the product number to remove from cart: ")?
    else {
        return Ok(());
    };
    let product = &catalog[index];

    let Some(quantity) = prompt_quantity("Enter the quantity to remove: ")? else {
        return Ok(());
    };

    debug!(product = %product.name, quantity, "remove_from_cart");
    match cart.remove_item(&product.name, quantity) {
        Ok(()) => println!("{} removed from cart.", product.name),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn handle_view(config: &ConsoleConfig, cart: &Cart) {
    debug!("view_cart");
    print!("{}", render_cart(config, cart));
}

fn handle_discount(cart: &mut Cart) -> io::Result<()> {
    println!("Discounts:");
    println!("1. No discount");
    println!("2. Percentage discount");
    println!("3. Buy one get one free");

    let Some(choice) = prompt("Enter your choice: ")? else {
        return Ok(());
    };

    match choice.as_str() {
        "1" => {
            cart.apply_discount(Discount::None);
            println!("Discount removed.");
        }
        "2" => {
            let Some(raw) = prompt("Enter the discount percentage: ")? else {
                return Ok(());
            };
            let Ok(pct) = raw.parse::<u32>() else {
                println!("Invalid input. Please enter a valid number.");
                return Ok(());
            };
            match Discount::percentage(pct) {
                Ok(discount) => {
                    debug!(percentage = pct, "apply_discount");
                    cart.apply_discount(discount);
                    println!("{pct}% discount will be applied at checkout.");
                }
                Err(err) => println!("{err}"),
            }
        }
        "3" => {
            debug!("apply_discount bogo");
            cart.apply_discount(Discount::BuyOneGetOneFree);
            println!("Buy one get one free will be applied at checkout.");
        }
        _ => println!("Invalid choice. Please select a valid option."),
    }
    Ok(())
}

fn handle_checkout(config: &ConsoleConfig, cart: &mut Cart) {
    let receipt = cart.checkout();

    match serde_json::to_string(&receipt) {
        Ok(json) => debug!(receipt = %json, "checkout"),
        Err(err) => debug!(error = %err, "receipt serialization failed"),
    }

    print!("{}", render_receipt(config, &receipt));
    info!(receipt_id = %receipt.id, total = %receipt.total, "checkout complete");
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the catalog listing shown at startup.
fn render_catalog(config: &ConsoleConfig, catalog: &[Product]) -> String {
    let mut out = String::from("Available Products:\n");
    for (number, product) in catalog.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - {} - {} - {}\n",
            number + 1,
            product.name,
            config.format_currency(product.price),
            if product.available {
                "Available"
            } else {
                "Not Available"
            },
            describe_kind(&product.kind),
        ));
    }
    out
}

/// Renders the cart contents and running totals.
fn render_cart(config: &ConsoleConfig, cart: &Cart) -> String {
    if cart.is_empty() {
        return String::from("Your cart is empty.\n");
    }

    let mut out = String::new();
    for item in cart.items() {
        out.push_str(&format!(
            "You have {} {} in your cart\n",
            item.quantity(),
            item.name()
        ));
    }

    let totals = cart.totals();
    out.push_str(&format!(
        "Subtotal: {}\n",
        config.format_currency(totals.subtotal)
    ));
    if !totals.discount_total.is_zero() {
        out.push_str(&format!(
            "Discount: -{}\n",
            config.format_currency(totals.discount_total)
        ));
    }
    out.push_str(&format!("Total: {}\n", config.format_currency(totals.total)));
    out
}

/// Renders a checkout receipt. The receipt id and timestamp go to the debug
/// log, not the printed copy.
fn render_receipt(config: &ConsoleConfig, receipt: &Receipt) -> String {
    let mut out = format!("{}\nYour cart:\n", config.store_name);

    for line in &receipt.lines {
        out.push_str(&format!(
            "{} - Quantity: {} - Price: {} - Subtotal: {}\n",
            line.name,
            line.quantity,
            config.format_currency(line.unit_price),
            config.format_currency(line.subtotal),
        ));
    }

    if !receipt.discount_total.is_zero() {
        out.push_str(&format!(
            "Discount: -{}\n",
            config.format_currency(receipt.discount_total)
        ));
    }
    out.push_str(&format!("Total: {}\n", config.format_currency(receipt.total)));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
