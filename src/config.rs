//! Deployment configuration resolution.
//!
//! Reads the container environment once at startup, applies compiled-in
//! defaults from [`crate::defaults`], and produces an immutable
//! [`ResolvedConfig`] that is passed explicitly to every consumer. Resolution
//! is total: every lookup has a fallback, and malformed values pass through
//! unchanged (an empty password override is ignored, not rejected).
//!
//! Hardening is a separate, explicit step: [`ResolvedConfig::validate`]
//! rejects placeholder secrets and debug display under a production profile.

use std::env;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::defaults;
use crate::error::AppError;

/// Database connection settings.
#[derive(Debug)]
pub struct DbConfig {
    pub name: String,
    pub user: String,
    /// Redacted in `Debug` output; never logged.
    pub password: SecretString,
    pub host: String,
    /// Charset for created tables. Fixed, not environment-overridable.
    pub charset: String,
    /// Collation for created tables. Empty means driver default.
    pub collation: String,
}

/// The eight cookie/session signing keys and salts.
#[derive(Debug)]
pub struct SigningKeys {
    pub auth_key: SecretString,
    pub secure_auth_key: SecretString,
    pub logged_in_key: SecretString,
    pub nonce_key: SecretString,
    pub auth_salt: SecretString,
    pub secure_auth_salt: SecretString,
    pub logged_in_salt: SecretString,
    pub nonce_salt: SecretString,
}

impl SigningKeys {
    /// Canonical (env var name, value) pairs, in the same order as
    /// [`defaults::SIGNING_KEY_PLACEHOLDERS`].
    pub fn named(&self) -> [(&'static str, &SecretString); 8] {
        [
            ("AUTH_KEY", &self.auth_key),
            ("SECURE_AUTH_KEY", &self.secure_auth_key),
            ("LOGGED_IN_KEY", &self.logged_in_key),
            ("NONCE_KEY", &self.nonce_key),
            ("AUTH_SALT", &self.auth_salt),
            ("SECURE_AUTH_SALT", &self.secure_auth_salt),
            ("LOGGED_IN_SALT", &self.logged_in_salt),
            ("NONCE_SALT", &self.nonce_salt),
        ]
    }
}

/// Debug flags. All fixed literals under the current contract.
#[derive(Debug, Clone, Copy)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log: bool,
    /// Render notices into responses. [`ResolvedConfig::validate`] refuses
    /// this in production.
    pub display: bool,
}

/// Periodic-task setting.
///
/// Deliberately has no `Enabled` variant: the platform contract distinguishes
/// "not configured" from "explicitly disabled", and nothing else. Any value
/// other than the exact string `"true"` in `DISABLE_WP_CRON` — including
/// `"false"`, `"TRUE"`, `"1"` and empty — leaves the setting [`Unset`].
///
/// [`Unset`]: CronSetting::Unset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronSetting {
    /// No cron directive is exported to the platform.
    Unset,
    /// The platform's periodic-task subsystem is switched off; an external
    /// scheduler is expected to drive it instead.
    Disabled,
}

/// Deployment profile, from `WP_ENVIRONMENT_TYPE`.
///
/// `"production"` selects [`Production`]; anything else, including an unset
/// variable, is [`Development`] so that resolution stays total.
///
/// [`Production`]: Profile::Production
/// [`Development`]: Profile::Development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
}

/// Fully-resolved deployment configuration.
///
/// Built exactly once per process and never mutated afterwards; any change
/// requires a restart. Consumers take `&ResolvedConfig`.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub db: DbConfig,
    pub keys: SigningKeys,
    pub table_prefix: String,
    pub debug: DebugConfig,
    pub cron: CronSetting,
    /// Platform install root (ABSPATH). Taken from the outer context when it
    /// defines one, otherwise the stock container path.
    pub install_root: PathBuf,
    pub profile: Profile,
}

/// Resolve configuration from the process environment.
///
/// Total: cannot fail for any environment contents.
pub fn resolve() -> ResolvedConfig {
    resolve_from(|name| env::var(name).ok())
}

/// Resolve against an injected lookup instead of the process environment.
/// Tests pass a map-backed closure rather than mutating env vars.
pub fn resolve_from<F>(lookup: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // "Present and non-empty" wins; anything else falls back.
    let var_or = |name: &str, default: &str| -> String {
        match lookup(name) {
            Some(v) if !v.is_empty() => v,
            _ => default.to_string(),
        }
    };
    let key_at = |i: usize| -> SecretString {
        let (name, placeholder) = defaults::SIGNING_KEY_PLACEHOLDERS[i];
        SecretString::from(var_or(name, placeholder))
    };

    let cron = match lookup("DISABLE_WP_CRON").as_deref() {
        Some("true") => CronSetting::Disabled,
        _ => CronSetting::Unset,
    };
    let profile = match lookup("WP_ENVIRONMENT_TYPE").as_deref() {
        Some("production") => Profile::Production,
        _ => Profile::Development,
    };

    ResolvedConfig {
        db: DbConfig {
            name: var_or("MYSQL_DATABASE", defaults::DB_NAME),
            user: var_or("MYSQL_USER", defaults::DB_USER),
            password: SecretString::from(var_or("MYSQL_PASSWORD", defaults::DB_PASSWORD)),
            host: var_or("MYSQL_DB_HOST", defaults::DB_HOST),
            charset: defaults::DB_CHARSET.to_string(),
            collation: defaults::DB_COLLATE.to_string(),
        },
        keys: SigningKeys {
            auth_key: key_at(0),
            secure_auth_key: key_at(1),
            logged_in_key: key_at(2),
            nonce_key: key_at(3),
            auth_salt: key_at(4),
            secure_auth_salt: key_at(5),
            logged_in_salt: key_at(6),
            nonce_salt: key_at(7),
        },
        table_prefix: defaults::TABLE_PREFIX.to_string(),
        debug: DebugConfig {
            enabled: defaults::DEBUG,
            log: defaults::DEBUG_LOG,
            display: defaults::DEBUG_DISPLAY,
        },
        cron,
        install_root: PathBuf::from(var_or("ABSPATH", defaults::INSTALL_ROOT)),
        profile,
    }
}

impl ResolvedConfig {
    /// Fail fast on configurations that must never reach production:
    /// placeholder signing keys, the stock database password, or debug
    /// display left on. A development profile accepts everything.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.profile != Profile::Production {
            return Ok(());
        }
        for (&(name, value), &(_, placeholder)) in self
            .keys
            .named()
            .iter()
            .zip(defaults::SIGNING_KEY_PLACEHOLDERS.iter())
        {
            if value.expose_secret() == placeholder {
                return Err(AppError::Config(format!(
                    "{name} is still the development placeholder; supply a unique value before running a production profile"
                )));
            }
        }
        if self.db.password.expose_secret() == defaults::DB_PASSWORD {
            return Err(AppError::Config(
                "MYSQL_PASSWORD is still the stock development password".into(),
            ));
        }
        if self.debug.display {
            return Err(AppError::Config(
                "debug display renders notices to end users and must be off in production".into(),
            ));
        }
        Ok(())
    }

    /// Serializable view for diagnostics, with secret material replaced by
    /// per-key status markers.
    pub fn redacted(&self) -> RedactedConfig {
        let signing_keys = self
            .keys
            .named()
            .iter()
            .zip(defaults::SIGNING_KEY_PLACEHOLDERS.iter())
            .map(|(&(name, value), &(_, placeholder))| KeyStatus {
                name,
                custom: value.expose_secret() != placeholder,
            })
            .collect();
        RedactedConfig {
            db_name: self.db.name.clone(),
            db_user: self.db.user.clone(),
            db_password: "<redacted>",
            db_host: self.db.host.clone(),
            db_charset: self.db.charset.clone(),
            db_collation: self.db.collation.clone(),
            table_prefix: self.table_prefix.clone(),
            debug: self.debug.enabled,
            debug_log: self.debug.log,
            debug_display: self.debug.display,
            cron_disabled: match self.cron {
                CronSetting::Disabled => Some(true),
                CronSetting::Unset => None,
            },
            install_root: self.install_root.display().to_string(),
            profile: match self.profile {
                Profile::Development => "development",
                Profile::Production => "production",
            },
            signing_keys,
        }
    }
}

/// Diagnostic view of a [`ResolvedConfig`] safe to print.
#[derive(Debug, Serialize)]
pub struct RedactedConfig {
    pub db_name: String,
    pub db_user: String,
    pub db_password: &'static str,
    pub db_host: String,
    pub db_charset: String,
    pub db_collation: String,
    pub table_prefix: String,
    pub debug: bool,
    pub debug_log: bool,
    pub debug_display: bool,
    /// `None` when the cron setting is absent — absent and `false` are
    /// distinct states, so absence serializes as `null`, never `false`.
    pub cron_disabled: Option<bool>,
    pub install_root: String,
    pub profile: &'static str,
    pub signing_keys: Vec<KeyStatus>,
}

/// Whether a signing key has been rotated away from its placeholder.
#[derive(Debug, Serialize)]
pub struct KeyStatus {
    pub name: &'static str,
    pub custom: bool,
}
