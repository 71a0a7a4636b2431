//! # Console Configuration
//!
//! Stores display configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BODEGA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization. The core never sees it:
//! currency formatting is strictly a console concern.

use bodega_core::Money;

/// Console display configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Store name (shown above the receipt)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    /// Zero means the minor unit is the display unit.
    pub currency_decimals: u8,
}

impl Default for ConsoleConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Bodega Dev Store"
    /// - Currency: Rs. with no decimal places
    fn default() -> Self {
        ConsoleConfig {
            store_name: "Bodega Dev Store".to_string(),
            currency_symbol: "Rs.".to_string(),
            currency_decimals: 0,
        }
    }
}

impl ConsoleConfig {
    /// Creates a ConsoleConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BODEGA_STORE_NAME`: Override store name
    /// - `BODEGA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BODEGA_CURRENCY_DECIMALS`: Override decimal places (e.g., "2")
    pub fn from_env() -> Self {
        let mut config = ConsoleConfig::default();

        if let Ok(store_name) = std::env::var("BODEGA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("BODEGA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(decimals) = std::env::var("BODEGA_CURRENCY_DECIMALS") {
            if let Ok(decimals) = decimals.parse::<u8>() {
                config.currency_decimals = decimals;
            }
        }

        config
    }

    /// Formats a monetary amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(10000)), "Rs.10000");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let minor = amount.minor();
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = (minor / divisor).abs();
        let frac = (minor % divisor).abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!("{whole}.{frac:0width$}", width = self.currency_decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}
