//! Snapshot -> typed entities

use shared::models::{
    Affiliate, BotBrainEntry, BotKeyword, BotPreset, Customer, InventoryItem, Order, Payout,
    Product,
};
use shared::protocol::WorkbookSnapshot;
use shared::settings::SettingsBundle;
use shared::sheet::{FlatRow, SheetEntity};

/// Workbook contents after row decoding and settings unflattening
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedWorkbook {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub affiliates: Vec<Affiliate>,
    pub payouts: Vec<Payout>,
    pub inventory: Vec<InventoryItem>,
    pub bot_brain: Vec<BotBrainEntry>,
    pub bot_keywords: Vec<BotKeyword>,
    pub bot_presets: Vec<BotPreset>,
    pub settings: SettingsBundle,
}

impl DecodedWorkbook {
    pub fn from_snapshot(snapshot: &WorkbookSnapshot) -> Self {
        Self {
            products: decode_rows(&snapshot.products),
            orders: decode_rows(&snapshot.orders),
            customers: decode_rows(&snapshot.customers),
            affiliates: decode_rows(&snapshot.affiliates),
            payouts: decode_rows(&snapshot.payouts),
            inventory: decode_rows(&snapshot.inventory),
            bot_brain: decode_rows(&snapshot.bot_brain),
            bot_keywords: decode_rows(&snapshot.bot_keywords),
            bot_presets: decode_rows(&snapshot.bot_presets),
            settings: snapshot.settings_bundle(),
        }
    }
}

/// Decode every row of one sheet; a bad row is logged and left out
pub fn decode_rows<T: SheetEntity>(rows: &[FlatRow]) -> Vec<T> {
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| match T::from_row(row) {
            Ok(entity) => Some(entity),
            Err(e) => {
                tracing::warn!(
                    sheet = T::SCHEMA.sheet,
                    // header is row 1
                    row = idx + 2,
                    error = %e,
                    "Skipping undecodable row"
                );
                None
            }
        })
        .collect()
}
