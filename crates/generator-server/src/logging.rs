use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_server=warn";
const DEBUG_FILTER: &str = "debug";

/// Installs the global subscriber. `log` records from the other crates are
/// forwarded into it.
pub fn init_logging(debug: bool, directives: Option<&str>, json: bool) {
    let filter = filter_for(debug, directives);
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_line_number(true)
                    .with_file(false),
            )
            .init();
    }
}

fn filter_for(debug: bool, directives: Option<&str>) -> EnvFilter {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid log filter '{directives}': {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None if debug => EnvFilter::new(DEBUG_FILTER),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_debug_filter() {
        assert_eq!(filter_for(true, None).to_string(), DEBUG_FILTER);
        assert!(filter_for(false, Some("  "))
            .to_string()
            .contains("actix_server=warn"));
    }

    #[test]
    fn explicit_directives_win() {
        assert_eq!(filter_for(true, Some("warn")).to_string(), "warn");
    }
}
