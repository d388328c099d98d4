//! Inventory Model
//!
//! One row per physical unit (modem/SIM) so serials can be traced to orders.

use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InventoryStatus {
    #[default]
    Available,
    Reserved,
    Sold,
    Defective,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub product_id: String,
    pub serial_number: String,
    #[serde(default)]
    pub status: InventoryStatus,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Unix millis
    #[serde(default)]
    pub updated_at: i64,
}

impl SheetEntity for InventoryItem {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "Inventory",
        headers: &[
            "id",
            "product_id",
            "serial_number",
            "status",
            "order_id",
            "updated_at",
            "json_data",
        ],
        text_columns: &["id", "product_id", "serial_number", "order_id"],
    };
}
