//! HTTP client for the workbook endpoint

use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use shared::models::{
    Affiliate, BotBrainEntry, BotKeyword, BotPreset, Customer, InventoryItem, Order, Payout,
    Product,
};
use shared::protocol::{
    ActionName, ActionTarget, READ_ACTION, WorkbookSnapshot, WriteRequest, WriteResponse,
};
use shared::settings::flatten_partition;
use shared::sheet::SheetEntity;
use std::time::Duration;

use crate::decode::DecodedWorkbook;
use crate::{ClientConfig, ClientError, ClientResult};

/// Client for the storefront's workbook endpoint
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
    config: ClientConfig,
}

impl SheetClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========== Read ==========

    /// Read and decode the whole workbook.
    ///
    /// Fail-closed: a network error, bad response or a read slower than
    /// `read_timeout_ms` is logged and yields `None`, never an error.
    pub async fn read(&self) -> Option<DecodedWorkbook> {
        match tokio::time::timeout(self.config.read_timeout(), self.fetch_snapshot()).await {
            Ok(Ok(snapshot)) => Some(DecodedWorkbook::from_snapshot(&snapshot)),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Workbook read failed");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.read_timeout_ms,
                    "Workbook read timed out"
                );
                None
            }
        }
    }

    /// Fetch the raw snapshot (no deadline, errors propagated)
    pub async fn fetch_snapshot(&self) -> ClientResult<WorkbookSnapshot> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("action", READ_ACTION)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(status_error(status, text));
        }
        Ok(response.json().await?)
    }

    // ========== Write ==========

    /// Send one write action, retrying transient failures with exponential backoff
    pub async fn write(&self, action: ActionName, payload: Value) -> ClientResult<WriteResponse> {
        let request = WriteRequest { action, payload };
        let mut attempt = 0;

        loop {
            match self.post_once(&request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.retry_delay(attempt);
                    tracing::warn!(
                        action = %action,
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Write failed, retrying: {e}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn post_once(&self, request: &WriteRequest) -> ClientResult<WriteResponse> {
        let response = self
            .client
            .post(&self.config.base_url)
            .json(request)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Map the HTTP response onto the write outcome
    async fn handle_response(response: reqwest::Response) -> ClientResult<WriteResponse> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, text));
        }

        let body: WriteResponse = serde_json::from_str(&text)?;
        if body.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Rejected(body.message.unwrap_or_default()))
        }
    }

    async fn sync<T: SheetEntity>(&self, action: ActionName, items: &[T]) -> ClientResult<WriteResponse> {
        let records = items
            .iter()
            .map(|item| item.to_record().map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;
        self.write(action, Value::Array(records)).await
    }

    async fn save(&self, action: ActionName, settings: &Map<String, Value>) -> ClientResult<WriteResponse> {
        let payload = Value::Object(settings.clone());
        // catch structural problems before they cost a round trip
        if let ActionTarget::Settings { prefix } = action.target() {
            flatten_partition(&payload, prefix)?;
        }
        self.write(action, payload).await
    }

    // ========== Entity sheets ==========

    pub async fn sync_products(&self, products: &[Product]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncProducts, products).await
    }

    pub async fn sync_orders(&self, orders: &[Order]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncOrders, orders).await
    }

    pub async fn sync_customers(&self, customers: &[Customer]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncCustomers, customers).await
    }

    pub async fn sync_affiliates(&self, affiliates: &[Affiliate]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncAffiliates, affiliates).await
    }

    pub async fn sync_payouts(&self, payouts: &[Payout]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncPayouts, payouts).await
    }

    pub async fn sync_inventory(&self, items: &[InventoryItem]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncInventory, items).await
    }

    pub async fn sync_bot_brain(&self, entries: &[BotBrainEntry]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncBotBrain, entries).await
    }

    pub async fn sync_bot_keywords(&self, keywords: &[BotKeyword]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncBotKeywords, keywords).await
    }

    pub async fn sync_bot_presets(&self, presets: &[BotPreset]) -> ClientResult<WriteResponse> {
        self.sync(ActionName::SyncBotPresets, presets).await
    }

    // ========== Settings ==========

    /// Save general settings (nested object, flattened by the server)
    pub async fn save_settings(&self, settings: &Map<String, Value>) -> ClientResult<WriteResponse> {
        self.save(ActionName::SaveSettings, settings).await
    }

    /// Save `section -> field -> value` payment settings
    pub async fn save_payment_settings(
        &self,
        settings: &Map<String, Value>,
    ) -> ClientResult<WriteResponse> {
        self.save(ActionName::SavePaymentSettings, settings).await
    }

    pub async fn save_smtp_settings(&self, settings: &Map<String, Value>) -> ClientResult<WriteResponse> {
        self.save(ActionName::SaveSmtpSettings, settings).await
    }
}

/// Non-2xx status to error: 5xx, timeouts and throttling may be retried,
/// anything else is a rejection
fn status_error(status: StatusCode, text: String) -> ClientError {
    if status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
    {
        return ClientError::Server {
            status: status.as_u16(),
            body: text,
        };
    }
    let message = serde_json::from_str::<WriteResponse>(&text)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or(text);
    ClientError::Rejected(format!("{status}: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_classification() {
        let err = status_error(StatusCode::BAD_GATEWAY, "upstream".into());
        assert!(matches!(err, ClientError::Server { status: 502, .. }));
        assert!(err.is_retryable());

        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error","message":"Validation failed: id"}"#.into(),
        );
        assert!(matches!(&err, ClientError::Rejected(msg) if msg.ends_with("Validation failed: id")));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_timeout_and_throttling_are_transient() {
        for status in [StatusCode::REQUEST_TIMEOUT, StatusCode::TOO_MANY_REQUESTS] {
            let err = status_error(status, String::new());
            assert!(err.is_retryable(), "{status}");
        }
        assert!(!status_error(StatusCode::NOT_FOUND, String::new()).is_retryable());
    }

    #[test]
    fn test_client_builds_from_config() {
        let client = ClientConfig::new("http://127.0.0.1:1").build_client().unwrap();
        assert_eq!(client.config().max_retries, 3);
    }
}
