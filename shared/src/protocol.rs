//! Wire protocol of the workbook endpoint
//!
//! ```text
//! GET  /?action=read                  -> WorkbookSnapshot
//! POST / {"action": ..., "payload"}   -> {"status": "success" | "error", "message"?}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::cell::CellValue;
use crate::models::{
    Affiliate, BotBrainEntry, BotKeyword, BotPreset, Customer, InventoryItem, Order, Payout,
    Product,
};
use crate::settings::{PAYMENT_PREFIX, SMTP_PREFIX, SettingsBundle, unflatten};
use crate::sheet::{FlatRow, SheetEntity, SheetSchema};

/// Read action accepted on `GET`
pub const READ_ACTION: &str = "read";

/// Write actions accepted on `POST`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionName {
    SyncProducts,
    SyncOrders,
    SyncCustomers,
    SyncAffiliates,
    SyncPayouts,
    SyncInventory,
    SaveSettings,
    SavePaymentSettings,
    SaveSmtpSettings,
    SyncBotBrain,
    SyncBotKeywords,
    SyncBotPresets,
}

/// What a write action does to the workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    /// Full overwrite of an entity sheet
    Entities(SheetSchema),
    /// Row-diff upsert into the settings sheet under an optional key prefix
    Settings { prefix: Option<&'static str> },
}

impl ActionName {
    pub const ALL: [ActionName; 12] = [
        Self::SyncProducts,
        Self::SyncOrders,
        Self::SyncCustomers,
        Self::SyncAffiliates,
        Self::SyncPayouts,
        Self::SyncInventory,
        Self::SaveSettings,
        Self::SavePaymentSettings,
        Self::SaveSmtpSettings,
        Self::SyncBotBrain,
        Self::SyncBotKeywords,
        Self::SyncBotPresets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyncProducts => "sync-products",
            Self::SyncOrders => "sync-orders",
            Self::SyncCustomers => "sync-customers",
            Self::SyncAffiliates => "sync-affiliates",
            Self::SyncPayouts => "sync-payouts",
            Self::SyncInventory => "sync-inventory",
            Self::SaveSettings => "save-settings",
            Self::SavePaymentSettings => "save-payment-settings",
            Self::SaveSmtpSettings => "save-smtp-settings",
            Self::SyncBotBrain => "sync-bot-brain",
            Self::SyncBotKeywords => "sync-bot-keywords",
            Self::SyncBotPresets => "sync-bot-presets",
        }
    }

    pub fn target(&self) -> ActionTarget {
        match self {
            Self::SyncProducts => ActionTarget::Entities(Product::SCHEMA),
            Self::SyncOrders => ActionTarget::Entities(Order::SCHEMA),
            Self::SyncCustomers => ActionTarget::Entities(Customer::SCHEMA),
            Self::SyncAffiliates => ActionTarget::Entities(Affiliate::SCHEMA),
            Self::SyncPayouts => ActionTarget::Entities(Payout::SCHEMA),
            Self::SyncInventory => ActionTarget::Entities(InventoryItem::SCHEMA),
            Self::SyncBotBrain => ActionTarget::Entities(BotBrainEntry::SCHEMA),
            Self::SyncBotKeywords => ActionTarget::Entities(BotKeyword::SCHEMA),
            Self::SyncBotPresets => ActionTarget::Entities(BotPreset::SCHEMA),
            Self::SaveSettings => ActionTarget::Settings { prefix: None },
            Self::SavePaymentSettings => ActionTarget::Settings {
                prefix: Some(PAYMENT_PREFIX),
            },
            Self::SaveSmtpSettings => ActionTarget::Settings {
                prefix: Some(SMTP_PREFIX),
            },
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionName {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

/// `POST` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteRequest {
    pub action: ActionName,
    /// Entity array or settings object, depending on the action
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Success,
    Error,
}

/// Response to every write (and to malformed reads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteResponse {
    pub status: WriteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WriteResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: WriteStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: WriteStatus::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == WriteStatus::Success
    }
}

/// One `{Key, Value}` row of the settings sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: CellValue,
}

/// Full contents of the workbook as returned by the read action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkbookSnapshot {
    #[serde(rename = "Products", default)]
    pub products: Vec<FlatRow>,
    #[serde(rename = "Orders", default)]
    pub orders: Vec<FlatRow>,
    #[serde(rename = "Customers", default)]
    pub customers: Vec<FlatRow>,
    #[serde(rename = "Affiliates", default)]
    pub affiliates: Vec<FlatRow>,
    #[serde(rename = "Payouts", default)]
    pub payouts: Vec<FlatRow>,
    #[serde(rename = "Inventory", default)]
    pub inventory: Vec<FlatRow>,
    #[serde(rename = "BotBrain", default)]
    pub bot_brain: Vec<FlatRow>,
    #[serde(rename = "BotKeywords", default)]
    pub bot_keywords: Vec<FlatRow>,
    #[serde(rename = "BotPresets", default)]
    pub bot_presets: Vec<FlatRow>,
    #[serde(rename = "Settings", default)]
    pub settings: Vec<SettingsEntry>,
}

impl WorkbookSnapshot {
    /// Row list for an entity sheet name, `None` for unknown sheets
    pub fn rows_mut(&mut self, sheet: &str) -> Option<&mut Vec<FlatRow>> {
        let rows = match sheet {
            "Products" => &mut self.products,
            "Orders" => &mut self.orders,
            "Customers" => &mut self.customers,
            "Affiliates" => &mut self.affiliates,
            "Payouts" => &mut self.payouts,
            "Inventory" => &mut self.inventory,
            "BotBrain" => &mut self.bot_brain,
            "BotKeywords" => &mut self.bot_keywords,
            "BotPresets" => &mut self.bot_presets,
            _ => return None,
        };
        Some(rows)
    }

    /// Rebuild the nested settings partitions from the `Settings` rows
    pub fn settings_bundle(&self) -> SettingsBundle {
        unflatten(
            self.settings
                .iter()
                .map(|entry| (entry.key.as_str(), entry.value.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_names_on_the_wire() {
        for action in ActionName::ALL {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, json!(action.as_str()));
            assert_eq!(action.as_str().parse::<ActionName>().unwrap(), action);
        }
        assert!("sync-everything".parse::<ActionName>().is_err());
    }

    #[test]
    fn test_every_entity_sheet_has_a_snapshot_slot() {
        let mut snapshot = WorkbookSnapshot::default();
        for action in ActionName::ALL {
            if let ActionTarget::Entities(schema) = action.target() {
                assert!(snapshot.rows_mut(schema.sheet).is_some(), "{}", schema.sheet);
            }
        }
    }

    #[test]
    fn test_write_response_shape() {
        let ok = serde_json::to_value(WriteResponse::success("Saved")).unwrap();
        assert_eq!(ok, json!({"status": "success", "message": "Saved"}));

        let parsed: WriteResponse = serde_json::from_value(json!({"status": "error"})).unwrap();
        assert!(!parsed.is_success());
        assert!(parsed.message.is_none());
    }

    #[test]
    fn test_snapshot_settings_unflatten() {
        let snapshot: WorkbookSnapshot = serde_json::from_value(json!({
            "Settings": [
                {"Key": "payment.gcash.enabled", "Value": "true"},
                {"Key": "payment.gcash.extra.deep", "Value": "x"},
                {"Key": "hero.title", "Value": "Sulit WiFi"}
            ]
        }))
        .unwrap();
        let bundle = snapshot.settings_bundle();
        assert_eq!(bundle.payment["gcash"]["enabled"], json!(true));
        assert_eq!(bundle.payment["gcash"].as_object().unwrap().len(), 1);
        assert_eq!(bundle.general["hero"]["title"], json!("Sulit WiFi"));
        assert!(snapshot.products.is_empty());
    }
}
