use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:postgres@db:5432/mydb";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogSection,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("STOCKROOM_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("STOCKROOM")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // `Environment` splits keys on '_', so a key that itself contains an
        // underscore is unreachable through the builder; resolve it by hand.
        if let Ok(data_path) = env::var("STOCKROOM_CATALOG_DATA_PATH") {
            config.catalog.data_path = data_path;
        }

        // Resolve the connection string once here so handlers never reach
        // into the ambient environment.
        if config.database.url.is_none() {
            config.database.url = env::var("DATABASE_URL").ok();
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub data_path: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            data_path: "data/items.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub enabled: bool,
    pub url: Option<String>,
}

impl DatabaseSection {
    /// Connection string with the hardcoded local fallback applied.
    pub fn resolved_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            enabled: true,
            url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
