//! Configuration module for loading and parsing TOML configuration files.

use crate::db::{Order, OrderId};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const ENV_CONFIG_PATH: &str = "MATCHBOOK_CONFIG";

/// Configuration file used when [`ENV_CONFIG_PATH`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/matchbook.toml";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Reference products to seed.
    #[serde(default)]
    pub products: Vec<ProductSeed>,
    /// Resting orders to seed.
    #[serde(default)]
    pub orders: Vec<OrderSeed>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Database configuration.
///
/// Without a `url` the service keeps its data in memory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    pub url: Option<String>,
    /// Maximum pool size.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub acquire_timeout_secs: u64,
    /// Whether to apply embedded migrations at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

/// Product reference data to seed.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSeed {
    /// Product symbol.
    pub symbol: String,
    /// Price quote currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Contract unit of measure.
    #[serde(default)]
    pub unit_of_measure: Option<String>,
}

/// Resting order to seed.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSeed {
    /// Order identifier.
    pub id: OrderId,
    /// Product symbol.
    pub product_symbol: String,
    /// Owning sub-account.
    pub sub_account_id: i32,
    /// Limit price.
    pub price: Decimal,
    /// Order quantity.
    pub quantity: i32,
}

impl OrderSeed {
    /// Builds an unlinked order from the seed.
    #[must_use]
    pub fn to_order(&self) -> Order {
        Order {
            id: self.id,
            product_symbol: self.product_symbol.clone(),
            sub_account_id: self.sub_account_id,
            price: self.price,
            quantity: self.quantity,
            link_id: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `HOST`, `PORT` and `DATABASE_URL` from the environment.
    ///
    /// # Errors
    /// Returns error if `PORT` is not a valid port number.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                ConfigError::InvalidValue(format!("PORT must be a valid number: {port}"))
            })?;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = Some(url);
        }
        Ok(())
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "database max_connections must be positive".to_string(),
            ));
        }

        let mut symbols = HashSet::new();
        for product in &self.products {
            if product.symbol.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "product symbol cannot be empty".to_string(),
                ));
            }
            symbols.insert(product.symbol.as_str());
        }

        let mut ids = HashSet::new();
        for order in &self.orders {
            if !ids.insert(order.id) {
                return Err(ConfigError::InvalidValue(format!(
                    "order {} is configured more than once",
                    order.id
                )));
            }
            if !symbols.contains(order.product_symbol.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "order {} references unknown product {}",
                    order.id, order.product_symbol
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
url = "postgres://localhost/matchbook"
max_connections = 4

[[products]]
symbol = "CL"
currency = "USD"
unit_of_measure = "barrels"

[[products]]
symbol = "GC"

[[orders]]
id = 1
product_symbol = "CL"
sub_account_id = 7
price = 71.25
quantity = 10
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/matchbook")
        );
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.acquire_timeout_secs, 5);
        assert!(config.database.run_migrations);
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[1].currency, None);
        assert_eq!(config.orders[0].price, dec!(71.25));
        assert_eq!(config.orders[0].to_order().link_id, None);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").expect("should parse");
        assert_eq!(config.server.port, 8080);
        assert!(config.database.url.is_none());
        assert!(config.orders.is_empty());
    }

    #[test]
    fn test_validation_duplicate_order_ids() {
        let toml_content = r#"
[[products]]
symbol = "CL"

[[orders]]
id = 1
product_symbol = "CL"
sub_account_id = 1
price = 1.0
quantity = 1

[[orders]]
id = 1
product_symbol = "CL"
sub_account_id = 1
price = 2.0
quantity = 1
"#;
        assert!(matches!(
            Config::parse(toml_content),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_validation_unknown_product() {
        let toml_content = r#"
[[orders]]
id = 1
product_symbol = "XX"
sub_account_id = 1
price = 1.0
quantity = 1
"#;
        let err = Config::parse(toml_content).unwrap_err();
        assert!(err.to_string().contains("unknown product XX"));
    }

    #[test]
    fn test_validation_zero_pool_size() {
        let config = Config {
            database: DatabaseConfig {
                max_connections: 0,
                ..DatabaseConfig::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
