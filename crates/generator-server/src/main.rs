use clap::Parser;

use generator_server::logging::init_logging;
use generator_server::{run_server, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    init_logging(config.debug, config.log_level.as_deref(), config.json_logs);

    log::info!("Backend API server running on http://localhost:{}", config.port);
    log::info!("API available at http://localhost:{}/api", config.port);
    log::info!("Environment: {}", config.app_env);
    log::info!("CORS origins: {}", config.cors_origins);

    if config.debug {
        log::debug!("Debug mode enabled");
        log::debug!("  Generate delay: {:?}", config.generate_delay());
        log::debug!("  Production: {}", config.is_production());
        log::debug!("  Passthrough: {:?}", config.passthrough());
    }

    run_server(config).await?;
    Ok(())
}
