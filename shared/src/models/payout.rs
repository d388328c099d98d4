//! Payout Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PayoutStatus {
    #[default]
    Requested,
    Approved,
    Paid,
    Rejected,
}

/// Affiliate commission payout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub affiliate_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub status: PayoutStatus,
    /// Unix millis
    pub requested_at: i64,
    #[serde(default)]
    pub processed_at: Option<i64>,
    /// Transfer reference number
    #[serde(default)]
    pub reference: Option<String>,
}

impl SheetEntity for Payout {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "Payouts",
        headers: &[
            "id",
            "affiliate_id",
            "amount",
            "method",
            "status",
            "requested_at",
            "processed_at",
            "json_data",
        ],
        text_columns: &["id", "affiliate_id", "method"],
    };
}
