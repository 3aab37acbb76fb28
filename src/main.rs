//! wp-entrypoint — container entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger
//!   3. Resolve config from the environment
//!   4. `print-config` mode: dump redacted config and exit
//!   5. Validate against the active profile
//!   6. Exec the platform runtime

use tracing::{info, warn};

use wp_entrypoint::bootstrap::{Bootstrap, ExecBootstrap};
use wp_entrypoint::config::{self, CronSetting, Profile};
use wp_entrypoint::error::AppError;
use wp_entrypoint::logger;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    logger::init("info")?;

    let config = config::resolve();

    let cron_disabled = config.cron == CronSetting::Disabled;
    info!(
        db_host = %config.db.host,
        db_name = %config.db.name,
        install_root = %config.install_root.display(),
        profile = ?config.profile,
        cron_disabled,
        "config resolved"
    );
    if config.profile == Profile::Development {
        warn!("development profile: placeholder secrets are accepted");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("print-config") {
        let dump = serde_json::to_string_pretty(&config.redacted())
            .map_err(|e| AppError::Config(format!("serialize config: {e}")))?;
        println!("{dump}");
        return Ok(());
    }

    config.validate()?;
    ExecBootstrap::new(args).run(&config)
}
