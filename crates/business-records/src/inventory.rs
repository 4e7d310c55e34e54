//! Products and the inventory that owns them.
//!
//! [`Inventory`] replaces a shared product list and tax rate: products only
//! exist in the inventory they were added to, and pricing queries read that
//! inventory's tax rate.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::money::format_currency;

static SKU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}\d{5}$").expect("sku regex"));

/// Simulated barcode lookup table: barcode, name, price, quantity, category.
const BARCODE_CATALOG: [(&str, &str, f64, u32, &str); 2] = [
    ("12345", "Laptop", 999.99, 10, "Electronics"),
    ("67890", "Coffee Mug", 12.99, 100, "Kitchen"),
];

// ── Product ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    /// Look `barcode` up in the built-in catalog without registering it anywhere.
    pub fn lookup_barcode(barcode: &str) -> Option<Self> {
        BARCODE_CATALOG
            .iter()
            .find(|(code, ..)| *code == barcode)
            .map(|&(_, name, price, quantity, category)| {
                Product::new(name, price, quantity, category)
            })
    }

    /// `price` reduced by `discount_percent` percent.
    pub fn calculate_discount(price: f64, discount_percent: f64) -> f64 {
        price * (1.0 - discount_percent / 100.0)
    }

    /// SKUs are three uppercase ASCII letters followed by five digits.
    pub fn is_valid_sku(sku: &str) -> bool {
        SKU_RE.is_match(sku)
    }

    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product('{}', {}, qty: {})",
            self.name,
            format_currency(self.price),
            self.quantity
        )
    }
}

// ── Inventory ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Sales tax as a fraction (0.08 = 8%).
    pub tax_rate: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { tax_rate: 0.08 }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    config: InventoryConfig,
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            config,
            products: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Register `product` and return the stored record.
    pub fn add(&mut self, product: Product) -> &Product {
        debug!(product = %product.name, category = %product.category, "product added");
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    /// Register the catalog product for `barcode`, or `None` for an unknown code.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_records::Inventory;
    ///
    /// let mut inventory = Inventory::default();
    /// assert_eq!(inventory.add_from_barcode("12345").unwrap().name, "Laptop");
    /// assert!(inventory.add_from_barcode("00000").is_none());
    /// assert_eq!(inventory.products().len(), 1);
    /// ```
    pub fn add_from_barcode(&mut self, barcode: &str) -> Option<&Product> {
        let product = Product::lookup_barcode(barcode)?;
        Some(self.add(product))
    }

    /// Register every product in `products`, returning how many were added.
    pub fn bulk_import(&mut self, products: impl IntoIterator<Item = Product>) -> usize {
        let before = self.products.len();
        self.products.extend(products);
        let imported = self.products.len() - before;
        info!(imported, total = self.products.len(), "bulk import complete");
        imported
    }

    /// Decode a JSON array of products and register them.
    ///
    /// Nothing is registered unless the whole array decodes.
    pub fn bulk_import_json(&mut self, json: &str) -> Result<usize> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(self.bulk_import(products))
    }

    /// Sum of price × quantity over every registered product.
    pub fn total_inventory_value(&self) -> f64 {
        self.products.iter().map(Product::value).sum()
    }

    pub fn find_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn tax_rate(&self) -> f64 {
        self.config.tax_rate
    }

    pub fn update_tax_rate(&mut self, new_rate: f64) {
        info!(from = self.config.tax_rate, to = new_rate, "tax rate updated");
        self.config.tax_rate = new_rate;
    }

    /// `product`'s price including this inventory's tax.
    pub fn price_with_tax(&self, product: &Product) -> f64 {
        product.price * (1.0 + self.config.tax_rate)
    }
}
