//! Customer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub total_spent: Decimal,
    /// Unix millis
    #[serde(default)]
    pub joined_at: i64,
}

impl SheetEntity for Customer {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "Customers",
        headers: &[
            "id",
            "name",
            "email",
            "phone",
            "total_orders",
            "total_spent",
            "joined_at",
            "json_data",
        ],
        text_columns: &["id", "name", "email", "phone"],
    };
}
