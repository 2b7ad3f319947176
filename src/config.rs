use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::domain::{
    ADDRESS_MATCH_FULL, ADDRESS_MATCH_PARTIAL, ADDRESS_MISMATCH_PENALTY, EMAIL_MATCH_FULL,
    EMAIL_MATCH_PARTIAL, NAME_MATCH_FULL, NAME_MATCH_PARTIAL, NAME_SURNAME_BONUS, ZIP_MATCH,
};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputSettings {
    /// Contact file to scan when no path is given on the command line.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// Report destination; stdout when absent.
    pub path: Option<String>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            path: None,
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Force the parallel pair-scoring path on or off.
    pub parallel: Option<bool>,
    /// Contact count at which the parallel path kicks in when `parallel`
    /// is unset.
    pub parallel_cutoff: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_name_full")]
    pub name_full: i32,
    #[serde(default = "default_name_partial")]
    pub name_partial: i32,
    #[serde(default = "default_name_surname_bonus")]
    pub name_surname_bonus: i32,
    #[serde(default = "default_email_full")]
    pub email_full: i32,
    #[serde(default = "default_email_partial")]
    pub email_partial: i32,
    #[serde(default = "default_zip")]
    pub zip: i32,
    #[serde(default = "default_address_full")]
    pub address_full: i32,
    #[serde(default = "default_address_partial")]
    pub address_partial: i32,
    #[serde(default = "default_address_mismatch_penalty")]
    pub address_mismatch_penalty: i32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            name_full: default_name_full(),
            name_partial: default_name_partial(),
            name_surname_bonus: default_name_surname_bonus(),
            email_full: default_email_full(),
            email_partial: default_email_partial(),
            zip: default_zip(),
            address_full: default_address_full(),
            address_partial: default_address_partial(),
            address_mismatch_penalty: default_address_mismatch_penalty(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            name_full: config.name_full,
            name_partial: config.name_partial,
            name_surname_bonus: config.name_surname_bonus,
            email_full: config.email_full,
            email_partial: config.email_partial,
            zip: config.zip,
            address_full: config.address_full,
            address_partial: config.address_partial,
            address_mismatch_penalty: config.address_mismatch_penalty,
        }
    }
}

fn default_name_full() -> i32 { NAME_MATCH_FULL }
fn default_name_partial() -> i32 { NAME_MATCH_PARTIAL }
fn default_name_surname_bonus() -> i32 { NAME_SURNAME_BONUS }
fn default_email_full() -> i32 { EMAIL_MATCH_FULL }
fn default_email_partial() -> i32 { EMAIL_MATCH_PARTIAL }
fn default_zip() -> i32 { ZIP_MATCH }
fn default_address_full() -> i32 { ADDRESS_MATCH_FULL }
fn default_address_partial() -> i32 { ADDRESS_MATCH_PARTIAL }
fn default_address_mismatch_penalty() -> i32 { ADDRESS_MISMATCH_PENALTY }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with DEDUPE)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with DEDUPE)
            // e.g., DEDUPE__REPORT__PATH -> report.path
            .add_source(
                Environment::with_prefix("DEDUPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DEDUPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
