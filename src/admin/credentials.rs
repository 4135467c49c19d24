//! Admin key and base URL resolution from explicit config and environment

use log::debug;

use crate::config::{api, provider};
use crate::error::{AdminError, Result};

/// Resolved connection settings for one provider instance
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub admin_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for ResolvedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSettings")
            .field("admin_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Settings resolution with environment fallback
///
/// An explicitly configured value always wins, even when empty; the
/// environment is only consulted for settings left unset.
pub struct SettingsResolver<F> {
    lookup: F,
}

impl SettingsResolver<fn(&str) -> Option<String>> {
    /// Resolver backed by the process environment
    pub fn from_env() -> Self {
        fn env_lookup(name: &str) -> Option<String> {
            std::env::var(name).ok()
        }
        Self { lookup: env_lookup }
    }
}

impl<F> SettingsResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Resolver backed by a custom variable lookup
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    /// Resolve both settings:
    /// 1. Explicit value (if set)
    /// 2. Environment variable (`ANTHROPIC_ADMIN_KEY` / `ANTHROPIC_BASE_URL`)
    /// 3. For the base URL only, the public API default
    ///
    /// A missing or empty admin key is a configuration error.
    pub fn resolve(
        &self,
        admin_key: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<ResolvedSettings> {
        let admin_key = self
            .pick("admin_key", admin_key, provider::ADMIN_KEY_ENV_VAR)
            .unwrap_or_default();
        if admin_key.is_empty() {
            return Err(AdminError::Config(format!(
                "The admin_key must be set in the provider configuration or via the {} environment variable.",
                provider::ADMIN_KEY_ENV_VAR
            )));
        }

        let base_url = self
            .pick("base_url", base_url, provider::BASE_URL_ENV_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| {
                debug!("Using default base URL {}", api::DEFAULT_BASE_URL);
                api::DEFAULT_BASE_URL.to_string()
            });

        Ok(ResolvedSettings {
            admin_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn pick(&self, setting: &str, explicit: Option<&str>, env_var: &str) -> Option<String> {
        if let Some(value) = explicit {
            debug!("Using {} from provider configuration", setting);
            return Some(value.to_string());
        }
        let value = (self.lookup)(env_var);
        if value.is_some() {
            debug!("Using {} from {} environment variable", setting, env_var);
        }
        value
    }
}
