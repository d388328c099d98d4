//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};
use crate::util::{now_millis, prefixed_id};

/// Order fulfilment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price in PHP
    pub price: Decimal,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Unix millis
    pub created_at: i64,
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: String,
    /// Affiliate code used at checkout
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Order {
    pub fn new(customer_name: impl Into<String>, items: Vec<OrderItem>, total: Decimal) -> Self {
        Self {
            id: prefixed_id("ORD"),
            created_at: now_millis(),
            customer_name: customer_name.into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            items,
            total,
            status: OrderStatus::Pending,
            payment_method: String::new(),
            referral_code: None,
            notes: None,
        }
    }
}

impl SheetEntity for Order {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "Orders",
        headers: &[
            "id",
            "created_at",
            "customer_name",
            "email",
            "phone",
            "total",
            "status",
            "payment_method",
            "referral_code",
            "json_data",
        ],
        text_columns: &[
            "id",
            "customer_name",
            "email",
            "phone",
            "payment_method",
            "referral_code",
        ],
    };
}
