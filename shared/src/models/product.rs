//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};
use crate::util::prefixed_id;

/// Catalog product (modem, pocket WiFi, load promo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Selling price in PHP
    pub price: Decimal,
    /// Struck-through price shown next to a promo
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: prefixed_id("PRD"),
            name: name.into(),
            category: String::new(),
            price,
            original_price: None,
            stock: 0,
            image: String::new(),
            description: String::new(),
            features: Vec::new(),
            is_active: true,
        }
    }
}

impl SheetEntity for Product {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "Products",
        headers: &[
            "id", "name", "category", "price", "stock", "image", "is_active", "json_data",
        ],
        text_columns: &["id", "name", "category", "image"],
    };
}
