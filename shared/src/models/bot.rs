//! Chat widget data
//!
//! The widget itself is not part of this workspace; only its knowledge base,
//! keyword replies and quick-reply presets are synced.

use serde::{Deserialize, Serialize};

use crate::sheet::{SheetEntity, SheetSchema};

/// Knowledge base entry fed to the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotBrainEntry {
    pub id: String,
    pub topic: String,
    pub content: String,
}

/// Canned reply triggered by any of `keywords`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotKeyword {
    pub id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub response: String,
}

/// Quick-reply button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotPreset {
    pub id: String,
    pub label: String,
    pub message: String,
}

impl SheetEntity for BotBrainEntry {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "BotBrain",
        headers: &["id", "topic", "content", "json_data"],
        text_columns: &["id", "topic", "content"],
    };
}

impl SheetEntity for BotKeyword {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "BotKeywords",
        headers: &["id", "keywords", "response", "json_data"],
        text_columns: &["id", "response"],
    };
}

impl SheetEntity for BotPreset {
    const SCHEMA: SheetSchema = SheetSchema {
        sheet: "BotPresets",
        headers: &["id", "label", "message", "json_data"],
        text_columns: &["id", "label", "message"],
    };
}
