//! Process configuration, read once at startup from flags and environment.

use clap::Parser;
use generator_sheets::{
    PassthroughConfig, ACTION_ID_VAR, BASE_URL_VAR, CONNECTION_KEY_VAR, RANGE_VAR,
    SECRET_KEY_VAR, SPREADSHEET_ID_VAR,
};
use std::time::Duration;

#[derive(Parser, Clone)]
#[command(name = "generator-server")]
#[command(about = "Workspace generator backend")]
#[command(version)]
pub struct ServerConfig {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8001")]
    pub port: u16,

    /// Allowed CORS origins, comma separated, or `*` for any
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Deployment environment name
    #[arg(long = "env", env = "APP_ENV", default_value = "development")]
    pub app_env: String,

    /// Delay added to successful /generate responses, in milliseconds
    #[arg(long, env = "GENERATE_DELAY_MS", default_value = "300")]
    pub generate_delay_ms: u64,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub json_logs: bool,

    /// Log filter directives (overrides the debug flag)
    #[arg(long, env = "RUST_LOG")]
    pub log_level: Option<String>,

    #[arg(long, env = SECRET_KEY_VAR, hide_env_values = true)]
    pub pica_secret_key: Option<String>,

    #[arg(long, env = CONNECTION_KEY_VAR, hide_env_values = true)]
    pub pica_connection_key: Option<String>,

    #[arg(long, env = ACTION_ID_VAR)]
    pub pica_action_id: Option<String>,

    #[arg(long, env = SPREADSHEET_ID_VAR)]
    pub spreadsheet_id: Option<String>,

    #[arg(long, env = RANGE_VAR)]
    pub sheet_range: Option<String>,

    /// Passthrough broker base URL
    #[arg(long, env = BASE_URL_VAR)]
    pub passthrough_base_url: Option<String>,
}

impl ServerConfig {
    pub fn generate_delay(&self) -> Duration {
        Duration::from_millis(self.generate_delay_ms)
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    pub fn passthrough(&self) -> PassthroughConfig {
        PassthroughConfig {
            secret_key: self.pica_secret_key.clone(),
            connection_key: self.pica_connection_key.clone(),
            action_id: self.pica_action_id.clone(),
            spreadsheet_id: self.spreadsheet_id.clone(),
            range: self.sheet_range.clone(),
            base_url: self.passthrough_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "generator-server",
            "--port",
            "9000",
            "--cors-origins",
            "http://localhost:5173",
            "--env",
            "production",
            "--generate-delay-ms",
            "0",
            "--pica-secret-key",
            "sk",
            "--sheet-range",
            "Sheet1!A:I",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, "http://localhost:5173");
        assert!(config.is_production());
        assert_eq!(config.generate_delay(), Duration::ZERO);

        let passthrough = config.passthrough();
        assert_eq!(passthrough.secret_key.as_deref(), Some("sk"));
        assert_eq!(passthrough.range.as_deref(), Some("Sheet1!A:I"));
    }

    #[test]
    fn passthrough_copies_every_field() {
        let config = ServerConfig::try_parse_from([
            "generator-server",
            "--pica-secret-key",
            "sk",
            "--pica-connection-key",
            "conn",
            "--pica-action-id",
            "act",
            "--spreadsheet-id",
            "sheet",
            "--sheet-range",
            "A:I",
            "--passthrough-base-url",
            "http://127.0.0.1:1",
        ])
        .unwrap();

        let passthrough = config.passthrough();
        assert!(passthrough.missing().is_empty());
        assert_eq!(passthrough.base_url(), "http://127.0.0.1:1");
    }

    #[test]
    fn passthrough_flags_read_the_shared_variable_names() {
        let command = ServerConfig::command();
        let env_names: Vec<&str> = command
            .get_arguments()
            .filter_map(|arg| arg.get_env())
            .filter_map(|name| name.to_str())
            .collect();
        for name in generator_sheets::REQUIRED_ENV_VARS
            .iter()
            .chain([&BASE_URL_VAR])
        {
            assert!(env_names.contains(name), "{name}");
        }
    }
}
