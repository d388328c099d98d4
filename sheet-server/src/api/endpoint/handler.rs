//! Workbook endpoint handlers

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use shared::models::{
    Affiliate, BotBrainEntry, BotKeyword, BotPreset, Customer, InventoryItem, Order, Payout,
    Product,
};
use shared::protocol::{
    ActionName, ActionTarget, READ_ACTION, WorkbookSnapshot, WriteRequest, WriteResponse,
};
use shared::settings::flatten_partition;
use shared::sheet::{SETTINGS_SCHEMA, SheetEntity};

use crate::core::ServerState;
use crate::sync::{full_sync, read_snapshot, upsert_settings};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ReadQuery {
    action: Option<String>,
}

/// GET /?action=read
pub async fn read(
    State(state): State<ServerState>,
    Query(query): Query<ReadQuery>,
) -> AppResult<Json<WorkbookSnapshot>> {
    match query.action.as_deref() {
        Some(READ_ACTION) => {}
        Some(other) => return Err(AppError::UnknownAction(other.to_string())),
        None => return Err(AppError::validation("missing action parameter")),
    }
    let snapshot = read_snapshot(state.workbook.as_ref()).await?;
    Ok(Json(snapshot))
}

/// POST / with `{action, payload}`
pub async fn write(
    State(state): State<ServerState>,
    body: Result<Json<WriteRequest>, JsonRejection>,
) -> AppResult<Json<WriteResponse>> {
    let Json(request) = body.map_err(|e| AppError::validation(e.body_text()))?;
    apply_write(&state, request).await.map(Json)
}

/// Run one write action against the workbook
pub async fn apply_write(state: &ServerState, request: WriteRequest) -> AppResult<WriteResponse> {
    let WriteRequest { action, payload } = request;

    match action.target() {
        ActionTarget::Entities(schema) => {
            let records = entity_records(action, payload)?;
            let _guard = state.locks.lock(schema.sheet).await;
            let count = full_sync(state.workbook.as_ref(), &schema, &records).await?;
            Ok(WriteResponse::success(format!(
                "{action}: wrote {count} rows to {}",
                schema.sheet
            )))
        }
        ActionTarget::Settings { prefix } => {
            if !payload.is_object() {
                return Err(AppError::validation(format!(
                    "{action} payload must be an object"
                )));
            }
            let flat = flatten_partition(&payload, prefix)
                .map_err(|e| AppError::validation(e.to_string()))?;
            let _guard = state.locks.lock(SETTINGS_SCHEMA.sheet).await;
            let plan = upsert_settings(state.workbook.as_ref(), &flat).await?;
            Ok(WriteResponse::success(format!(
                "{action}: updated {}, added {}",
                plan.updates.len(),
                plan.appends.len()
            )))
        }
    }
}

type EntityCheck = fn(&Value) -> Result<(), serde_json::Error>;

fn check_entity<T: SheetEntity>(item: &Value) -> Result<(), serde_json::Error> {
    T::deserialize(item).map(|_| ())
}

/// Validate every payload item against its model, keeping the original
/// objects so fields the model does not know still land in `json_data`
fn entity_records(action: ActionName, payload: Value) -> AppResult<Vec<Map<String, Value>>> {
    let check: EntityCheck = match action {
        ActionName::SyncProducts => check_entity::<Product>,
        ActionName::SyncOrders => check_entity::<Order>,
        ActionName::SyncCustomers => check_entity::<Customer>,
        ActionName::SyncAffiliates => check_entity::<Affiliate>,
        ActionName::SyncPayouts => check_entity::<Payout>,
        ActionName::SyncInventory => check_entity::<InventoryItem>,
        ActionName::SyncBotBrain => check_entity::<BotBrainEntry>,
        ActionName::SyncBotKeywords => check_entity::<BotKeyword>,
        ActionName::SyncBotPresets => check_entity::<BotPreset>,
        ActionName::SaveSettings
        | ActionName::SavePaymentSettings
        | ActionName::SaveSmtpSettings => {
            return Err(AppError::Internal(format!(
                "{action} is not an entity action"
            )));
        }
    };

    let Value::Array(items) = payload else {
        return Err(AppError::validation(format!(
            "{action} payload must be an array"
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            check(&item).map_err(|e| AppError::validation(format!("{action} item {idx}: {e}")))?;
            match item {
                Value::Object(map) => Ok(map),
                _ => Err(AppError::validation(format!(
                    "{action} item {idx} is not an object"
                ))),
            }
        })
        .collect()
}
