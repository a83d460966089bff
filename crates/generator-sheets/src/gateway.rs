use async_trait::async_trait;
use generator_core::SaveRecord;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::{Credentials, PassthroughConfig};
use crate::error::{PersistenceError, Result};

const SECRET_HEADER: &str = "x-pica-secret";
const CONNECTION_KEY_HEADER: &str = "x-pica-connection-key";
const ACTION_ID_HEADER: &str = "x-pica-action-id";

#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub run_id: String,
    pub provider_response: Value,
}

/// Destination for finished runs.
///
/// A save is a single append; calling it twice with the same record writes
/// two rows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn save(&self, record: &SaveRecord) -> Result<SaveOutcome>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendRequest<'a> {
    major_dimension: &'static str,
    values: [[&'a str; 9]; 1],
}

/// Appends rows to a Google Sheet through the Pica passthrough broker.
pub struct PassthroughGateway {
    client: Client,
    config: PassthroughConfig,
}

impl PassthroughGateway {
    pub fn new(config: PassthroughConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: PassthroughConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PassthroughConfig {
        &self.config
    }

    fn append_url(&self, credentials: &Credentials<'_>) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url())?;
        let target = format!("{}:append", credentials.range);
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                credentials.spreadsheet_id,
                "values",
                target.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");
        Ok(url)
    }
}

#[async_trait]
impl RecordStore for PassthroughGateway {
    async fn save(&self, record: &SaveRecord) -> Result<SaveOutcome> {
        let credentials = self.config.credentials()?;
        let url = self.append_url(&credentials)?;

        log::info!(
            "[{}] Appending row to spreadsheet {} range {}",
            record.run_id,
            credentials.spreadsheet_id,
            credentials.range
        );

        let body = AppendRequest {
            major_dimension: "ROWS",
            values: [record.row()],
        };

        let response = self
            .client
            .post(url)
            .header(SECRET_HEADER, credentials.secret_key)
            .header(CONNECTION_KEY_HEADER, credentials.connection_key)
            .header(ACTION_ID_HEADER, credentials.action_id)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("[{}] Passthrough returned {}: {}", record.run_id, status, text);
            return Err(PersistenceError::Provider { status, body: text });
        }

        let provider_response = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        log::debug!("[{}] Row appended", record.run_id);

        Ok(SaveOutcome {
            run_id: record.run_id.clone(),
            provider_response,
        })
    }
}
