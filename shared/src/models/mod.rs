//! Data models
//!
//! Every entity lives one-per-row in its own sheet. IDs are strings generated
//! client-side (see [`crate::util::prefixed_id`]). Money uses `Decimal`.

pub mod affiliate;
pub mod bot;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod payout;
pub mod product;

// Re-exports
pub use affiliate::*;
pub use bot::*;
pub use customer::*;
pub use inventory::*;
pub use order::*;
pub use payout::*;
pub use product::*;

use crate::sheet::{SheetEntity, SheetSchema};

/// Layouts of every entity sheet, in read order
pub const ENTITY_SCHEMAS: [SheetSchema; 9] = [
    Product::SCHEMA,
    Order::SCHEMA,
    Customer::SCHEMA,
    Affiliate::SCHEMA,
    Payout::SCHEMA,
    InventoryItem::SCHEMA,
    BotBrainEntry::SCHEMA,
    BotKeyword::SCHEMA,
    BotPreset::SCHEMA,
];

pub(crate) fn default_true() -> bool {
    true
}
