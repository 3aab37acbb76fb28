//! Handoff to the platform runtime.
//!
//! Resolution owns nothing past this boundary: the platform process receives
//! the resolved settings through its canonical environment names and runs for
//! the rest of the container's lifetime.

use std::process::Command;

use secrecy::ExposeSecret;
use tracing::info;

use crate::config::{CronSetting, ResolvedConfig};
use crate::error::AppError;

/// Platform command used when none is given on our argv.
pub const DEFAULT_COMMAND: &str = "php-fpm";

/// The external collaborator that consumes a [`ResolvedConfig`].
pub trait Bootstrap {
    /// Hand the process over to the platform. In production this only
    /// returns on failure.
    fn run(&self, config: &ResolvedConfig) -> Result<(), AppError>;
}

/// (name, value) pairs exported into the platform environment.
///
/// `DISABLE_WP_CRON` is emitted only when the setting is
/// [`CronSetting::Disabled`]; an absent setting exports nothing, because the
/// platform treats "unset" and "false" as different states.
pub fn env_exports(config: &ResolvedConfig) -> Vec<(String, String)> {
    fn flag(v: bool) -> String {
        if v { "true".into() } else { "false".into() }
    }

    let mut vars: Vec<(String, String)> = vec![
        ("WORDPRESS_DB_NAME".into(), config.db.name.clone()),
        ("WORDPRESS_DB_USER".into(), config.db.user.clone()),
        (
            "WORDPRESS_DB_PASSWORD".into(),
            config.db.password.expose_secret().to_string(),
        ),
        ("WORDPRESS_DB_HOST".into(), config.db.host.clone()),
        ("WORDPRESS_DB_CHARSET".into(), config.db.charset.clone()),
        ("WORDPRESS_DB_COLLATE".into(), config.db.collation.clone()),
        ("WORDPRESS_TABLE_PREFIX".into(), config.table_prefix.clone()),
        ("WORDPRESS_DEBUG".into(), flag(config.debug.enabled)),
        ("WORDPRESS_DEBUG_LOG".into(), flag(config.debug.log)),
        ("WORDPRESS_DEBUG_DISPLAY".into(), flag(config.debug.display)),
        ("ABSPATH".into(), config.install_root.display().to_string()),
    ];
    for (name, value) in config.keys.named() {
        vars.push((name.to_string(), value.expose_secret().to_string()));
    }
    if config.cron == CronSetting::Disabled {
        vars.push(("DISABLE_WP_CRON".into(), "true".into()));
    }
    vars
}

/// Production bootstrap: replaces this process with the platform command.
pub struct ExecBootstrap {
    argv: Vec<String>,
}

impl ExecBootstrap {
    /// `argv` is the platform command with its arguments; empty means
    /// [`DEFAULT_COMMAND`].
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    fn command(&self) -> (&str, &[String]) {
        match self.argv.split_first() {
            Some((program, args)) => (program.as_str(), args),
            None => (DEFAULT_COMMAND, &[]),
        }
    }
}

impl Bootstrap for ExecBootstrap {
    fn run(&self, config: &ResolvedConfig) -> Result<(), AppError> {
        let (program, args) = self.command();
        let mut cmd = Command::new(program);
        cmd.args(args).envs(env_exports(config));

        info!(command = %program, "handing off to platform runtime");

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // exec only returns on failure.
            let err = cmd.exec();
            Err(AppError::Bootstrap(format!("exec {program}: {err}")))
        }

        #[cfg(not(unix))]
        {
            let status = cmd
                .status()
                .map_err(|e| AppError::Bootstrap(format!("spawn {program}: {e}")))?;
            if status.success() {
                Ok(())
            } else {
                Err(AppError::Bootstrap(format!(
                    "{program} exited with {status}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_from;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn export_map(pairs: Vec<(String, String)>) -> HashMap<String, String> {
        pairs.into_iter().collect()
    }

    #[test]
    fn exports_map_to_platform_names() {
        let cfg = resolve_from(env_of(&[
            ("MYSQL_DATABASE", "app_db"),
            ("MYSQL_PASSWORD", "s3cret"),
        ]));
        let vars = export_map(env_exports(&cfg));
        assert_eq!(vars["WORDPRESS_DB_NAME"], "app_db");
        assert_eq!(vars["WORDPRESS_DB_USER"], "wpuser");
        assert_eq!(vars["WORDPRESS_DB_PASSWORD"], "s3cret");
        assert_eq!(vars["WORDPRESS_DB_HOST"], "db");
        assert_eq!(vars["WORDPRESS_DB_CHARSET"], "utf8mb4");
        assert_eq!(vars["WORDPRESS_DB_COLLATE"], "");
        assert_eq!(vars["WORDPRESS_TABLE_PREFIX"], "wp_");
        assert_eq!(vars["WORDPRESS_DEBUG"], "true");
        assert_eq!(vars["ABSPATH"], "/var/www/html");
    }

    #[test]
    fn all_eight_keys_are_exported() {
        let cfg = resolve_from(env_of(&[("NONCE_SALT", "rotated")]));
        let vars = export_map(env_exports(&cfg));
        for (name, _) in crate::defaults::SIGNING_KEY_PLACEHOLDERS {
            assert!(vars.contains_key(name), "missing {name}");
        }
        assert_eq!(vars["NONCE_SALT"], "rotated");
    }

    #[test]
    fn cron_export_present_only_when_disabled() {
        let unset = resolve_from(env_of(&[]));
        assert!(!export_map(env_exports(&unset)).contains_key("DISABLE_WP_CRON"));

        let explicit_false = resolve_from(env_of(&[("DISABLE_WP_CRON", "false")]));
        assert!(!export_map(env_exports(&explicit_false)).contains_key("DISABLE_WP_CRON"));

        let disabled = resolve_from(env_of(&[("DISABLE_WP_CRON", "true")]));
        assert_eq!(
            export_map(env_exports(&disabled))["DISABLE_WP_CRON"],
            "true"
        );
    }

    #[test]
    fn empty_argv_uses_default_command() {
        let b = ExecBootstrap::new(vec![]);
        let (program, args) = b.command();
        assert_eq!(program, DEFAULT_COMMAND);
        assert!(args.is_empty());
    }

    #[test]
    fn argv_passes_through() {
        let b = ExecBootstrap::new(vec!["apache2-foreground".into(), "-D".into()]);
        let (program, args) = b.command();
        assert_eq!(program, "apache2-foreground");
        assert_eq!(args.len(), 1);
        assert_eq!(args[0], "-D");
    }

    #[test]
    fn exec_missing_program_reports_bootstrap_error() {
        let cfg = resolve_from(env_of(&[]));
        let b = ExecBootstrap::new(vec!["/nonexistent/platform-binary".into()]);
        let err = b.run(&cfg).unwrap_err().to_string();
        assert!(err.contains("bootstrap error"), "got: {err}");
    }
}
