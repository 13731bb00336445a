use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::vocabulary::Vocabulary;
use crate::models::RankingPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub parsing: ParsingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Upstream endpoint returning the opportunity list
    pub source_url: Option<String>,
    /// Local JSON snapshot used when no URL is set
    pub snapshot_path: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source_url: None,
            snapshot_path: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 { 30 }
fn default_cache_ttl_secs() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_max_missing_skills")]
    pub max_missing_skills: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
            max_missing_skills: default_max_missing_skills(),
        }
    }
}

fn default_min_score() -> f64 { 0.1 }
fn default_max_results() -> usize { 10 }
fn default_max_missing_skills() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct ParsingSettings {
    #[serde(default = "default_min_document_chars")]
    pub min_document_chars: usize,
    /// Terms appended to the built-in technical vocabulary
    #[serde(default)]
    pub extra_vocabulary: Vec<String>,
}

impl Default for ParsingSettings {
    fn default() -> Self {
        Self {
            min_document_chars: default_min_document_chars(),
            extra_vocabulary: Vec::new(),
        }
    }
}

fn default_min_document_chars() -> usize { 30 }

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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERNMATE__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERNMATE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_env_shortcuts(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a single file plus the environment
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy {
            min_score: self.ranking.min_score,
            max_results: self.ranking.max_results,
            max_missing_skills: self.ranking.max_missing_skills,
        }
    }

    /// Built-in vocabulary plus `parsing.extra_vocabulary`
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extra_terms(&self.parsing.extra_vocabulary)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("INTERNMATE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("parsing.extra_vocabulary")
}

/// Honour the conventional `CATALOG_URL` variable when the prefixed form is unset
fn apply_env_shortcuts(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    if env::var("INTERNMATE__CATALOG__SOURCE_URL").is_ok() {
        return Ok(settings);
    }

    match env::var("CATALOG_URL") {
        Ok(url) if !url.trim().is_empty() => Config::builder()
            .add_source(settings)
            .set_override("catalog.source_url", url)?
            .build(),
        _ => Ok(settings),
    }
}
