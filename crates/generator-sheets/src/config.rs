//! Settings for the spreadsheet passthrough.
//!
//! Every value is optional when the process starts; a save fails with
//! [`PersistenceError::ConfigurationMissing`] until all five are present.

use crate::error::{PersistenceError, Result};

pub const PASSTHROUGH_BASE_URL: &str = "https://api.picaos.com/v1/passthrough";

pub const SECRET_KEY_VAR: &str = "PICA_SECRET_KEY";
pub const CONNECTION_KEY_VAR: &str = "PICA_SHEETS_CONNECTION_KEY";
pub const ACTION_ID_VAR: &str = "PICA_SHEETS_APPEND_ACTION_ID";
pub const SPREADSHEET_ID_VAR: &str = "GOOGLE_SHEETS_SPREADSHEET_ID";
pub const RANGE_VAR: &str = "GOOGLE_SHEETS_RANGE";
pub const BASE_URL_VAR: &str = "PICA_PASSTHROUGH_BASE_URL";

pub const REQUIRED_ENV_VARS: [&str; 5] = [
    SECRET_KEY_VAR,
    CONNECTION_KEY_VAR,
    ACTION_ID_VAR,
    SPREADSHEET_ID_VAR,
    RANGE_VAR,
];

#[derive(Clone, Default)]
pub struct PassthroughConfig {
    pub secret_key: Option<String>,
    pub connection_key: Option<String>,
    pub action_id: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub range: Option<String>,
    pub base_url: Option<String>,
}

/// The five required values, all present.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub secret_key: &'a str,
    pub connection_key: &'a str,
    pub action_id: &'a str,
    pub spreadsheet_id: &'a str,
    pub range: &'a str,
}

impl PassthroughConfig {
    pub fn base_url(&self) -> &str {
        present(&self.base_url).unwrap_or(PASSTHROUGH_BASE_URL)
    }

    /// Names of the required variables that are absent or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (SECRET_KEY_VAR, &self.secret_key),
            (CONNECTION_KEY_VAR, &self.connection_key),
            (ACTION_ID_VAR, &self.action_id),
            (SPREADSHEET_ID_VAR, &self.spreadsheet_id),
            (RANGE_VAR, &self.range),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn credentials(&self) -> Result<Credentials<'_>> {
        match (
            present(&self.secret_key),
            present(&self.connection_key),
            present(&self.action_id),
            present(&self.spreadsheet_id),
            present(&self.range),
        ) {
            (
                Some(secret_key),
                Some(connection_key),
                Some(action_id),
                Some(spreadsheet_id),
                Some(range),
            ) => Ok(Credentials {
                secret_key,
                connection_key,
                action_id,
                spreadsheet_id,
                range,
            }),
            _ => Err(PersistenceError::ConfigurationMissing {
                missing: self.missing(),
            }),
        }
    }
}

impl std::fmt::Debug for PassthroughConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| present(value).map(|_| "<set>");
        f.debug_struct("PassthroughConfig")
            .field("secret_key", &redact(&self.secret_key))
            .field("connection_key", &redact(&self.connection_key))
            .field("action_id", &self.action_id)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("base_url", &self.base_url())
            .finish()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
