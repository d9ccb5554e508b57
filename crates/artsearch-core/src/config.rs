//! Configuration for search and suggestion tunables.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env
//! vars into typed sections, all of which carry working defaults so a
//! missing file is not an error.
//!
//! Contract values (ranking weights, fuzzy parameters, the autocomplete
//! boost) are named constants next to the code that uses them, not config.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub suggest: SuggestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Prefixes shorter than this never reach the backend.
    pub min_prefix_len: usize,
    /// Per-entity-type cap on merged suggestions, small enough to keep a
    /// dropdown readable.
    pub per_scope_limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: 2,
            per_scope_limit: 8,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        let config: Config = figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.search.max_limit == 0 || self.search.default_limit == 0 {
            return Err(Error::InvalidConfig("search limits must be positive".to_string()).into());
        }
        if self.search.default_limit > self.search.max_limit {
            return Err(Error::InvalidConfig(format!(
                "search.default_limit {} exceeds search.max_limit {}",
                self.search.default_limit, self.search.max_limit
            ))
            .into());
        }
        if self.suggest.min_prefix_len == 0 {
            return Err(
                Error::InvalidConfig("suggest.min_prefix_len must be at least 1".to_string())
                    .into(),
            );
        }
        if self.suggest.per_scope_limit == 0 {
            return Err(
                Error::InvalidConfig("suggest.per_scope_limit must be positive".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Resolve a caller-requested page size against the configured bounds.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.search.default_limit)
            .min(self.search.max_limit)
    }
}
