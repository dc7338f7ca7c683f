use anyhow::{Context, Result};
use mastercheck::config::{load_master_config, AppConfig};
use mastercheck::validation::{validate_master_config, FieldPath};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(path) = std::env::args().nth(1) {
        config.master_config = path;
    }

    // Initialize tracing
    init_tracing(&config.log_level)?;

    info!("Validating master config {}", config.master_config);
    let master = load_master_config(&config.master_config)
        .with_context(|| format!("failed to load {}", config.master_config))?;

    let results = validate_master_config(&master, &FieldPath::root());
    for warning in &results.warnings {
        warn!("{}", warning);
    }

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for err in &results.errors {
            println!("{}", err);
        }
    }

    let failed =
        results.has_errors() || (config.fail_on_warnings && !results.warnings.is_empty());
    if failed {
        error!(
            "Master config is invalid: {} errors, {} warnings",
            results.errors.len(),
            results.warnings.len()
        );
        std::process::exit(1);
    }

    info!(
        "Master config is valid ({} warnings)",
        results.warnings.len()
    );
    Ok(())
}

fn init_tracing(default_filter: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
