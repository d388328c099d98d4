//! Affiliate Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AffiliateStatus {
    #[default]
    Pending,
    Active,
    Suspended,
}

/// Referral partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Referral code entered at checkout
    pub code: String,
    /// Commission in percent (e.g. 10 = 10%)
    #[serde(default)]
    pub commission_rate: Decimal,
    #[serde(default)]
    pub status: AffiliateStatus,
    #[serde(default)]
    pub total_earnings: Decimal,
    /// e.g. "GCash"
    #[serde(default)]
    pub payout_method: Option<String>,
    #[serde(default)]
    pub payout_account: Option<String>,
    /// Unix millis
    #[serde(default)]
    pub joined_at: i64,
}

impl SheetEntity for Affiliate {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "Affiliates",
        headers: &[
            "id",
            "name",
            "email",
            "code",
            "commission_rate",
            "status",
            "total_earnings",
            "joined_at",
            "json_data",
        ],
        text_columns: &["id", "name", "email", "code"],
    };
}
