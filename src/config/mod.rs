//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `TRIX` prefix with
//! `__` separating nested values, e.g. `TRIX__NFD__API_BASE=...`.
//! Every section has working testnet defaults, so an empty environment
//! yields a usable configuration.

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

use crate::domain::format::Formatter;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chain network and explorer links.
    #[serde(default)]
    pub network: NetworkConfig,

    /// NFD registry API and minting constants.
    #[serde(default)]
    pub nfd: NfdConfig,

    /// Spot price quote API.
    #[serde(default)]
    pub quotes: QuotesConfig,

    /// Native/token swap endpoint.
    #[serde(default)]
    pub swap: SwapConfig,

    /// Cross-chain bridge endpoint.
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// NFT metadata store endpoint.
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Reply rendering bounds.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Outbound HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_network_name")]
    pub name: String,
    /// Base URL for transaction links; the tx id is appended.
    #[serde(default = "default_explorer_tx_base")]
    pub explorer_tx_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NfdConfig {
    #[serde(default = "default_nfd_api_base")]
    pub api_base: String,
    /// Application id of the on-chain NFD registry.
    #[serde(default = "default_nfd_registry_app_id")]
    pub registry_app_id: u64,
    /// Registration price per year, in micro units.
    #[serde(default = "default_nfd_mint_price")]
    pub mint_price_micro_algos: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotesConfig {
    #[serde(default = "default_quotes_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwapConfig {
    #[serde(default = "default_swap_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_bridge_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_metadata_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_list_items")]
    pub max_list_items: usize,
    #[serde(default = "default_max_description_chars")]
    pub max_description_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_network_name() -> String {
    "testnet".to_string()
}

fn default_explorer_tx_base() -> String {
    "https://testnet.explorer.perawallet.app/tx".to_string()
}

fn default_nfd_api_base() -> String {
    "https://api.testnet.nf.domains".to_string()
}

fn default_nfd_registry_app_id() -> u64 {
    84_366_825
}

fn default_nfd_mint_price() -> u64 {
    5_000_000
}

fn default_quotes_api_base() -> String {
    "https://simpleswap.io/api/v3".to_string()
}

fn default_swap_api_base() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_bridge_api_base() -> String {
    "http://localhost:4000".to_string()
}

fn default_metadata_api_base() -> String {
    "http://localhost:5001".to_string()
}

fn default_max_list_items() -> usize {
    10
}

fn default_max_description_chars() -> usize {
    200
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            explorer_tx_base: default_explorer_tx_base(),
        }
    }
}

impl Default for NfdConfig {
    fn default() -> Self {
        Self {
            api_base: default_nfd_api_base(),
            registry_app_id: default_nfd_registry_app_id(),
            mint_price_micro_algos: default_nfd_mint_price(),
        }
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            api_base: default_quotes_api_base(),
        }
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            api_base: default_swap_api_base(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            api_base: default_bridge_api_base(),
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            api_base: default_metadata_api_base(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_list_items: default_max_list_items(),
            max_description_chars: default_max_description_chars(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `TRIX` prefix and `__` separators for nested values, e.g.
    /// `TRIX__DISPLAY__MAX_LIST_ITEMS=5`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("TRIX").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of loaded values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, url) in [
            ("network.explorer_tx_base", &self.network.explorer_tx_base),
            ("nfd.api_base", &self.nfd.api_base),
            ("quotes.api_base", &self.quotes.api_base),
            ("swap.api_base", &self.swap.api_base),
            ("bridge.api_base", &self.bridge.api_base),
            ("metadata.api_base", &self.metadata.api_base),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::new(field, format!("not an http(s) URL: {url}")));
            }
        }
        if self.display.max_list_items == 0 {
            return Err(ValidationError::new("display.max_list_items", "must be at least 1"));
        }
        if self.http.timeout_secs == 0 {
            return Err(ValidationError::new("http.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }

    /// Builds the reply formatter from the display and network sections.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.network.explorer_tx_base.clone(),
            self.display.max_list_items,
            self.display.max_description_chars,
        )
    }
}
