pub mod config;
pub mod error;
pub mod gateway;

pub use config::{
    PassthroughConfig, ACTION_ID_VAR, BASE_URL_VAR, CONNECTION_KEY_VAR, PASSTHROUGH_BASE_URL,
    RANGE_VAR, REQUIRED_ENV_VARS, SECRET_KEY_VAR, SPREADSHEET_ID_VAR,
};
pub use error::{PersistenceError, Result};
pub use gateway::{PassthroughGateway, RecordStore, SaveOutcome};
