//! # Front Desk Configuration
//!
//! Startup configuration for the front-desk server.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MINT_PORT=9090                                                     │
//! │     MINT_SALON_NAME="Mint Uptown"                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/front-desk/front-desk.toml (Linux)                       │
//! │     or the path in MINT_CONFIG                                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, MintSalon, 8% tax, demo data on                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # front-desk.toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 8080
//!
//! [salon]
//! name = "MintSalon"
//! address = ["123 Styling Ave", "New York, NY 10001"]
//! phone = "(555) 010-2030"
//! tax_rate_bps = 800
//!
//! [data]
//! seed_demo = true
//!
//! [paths]
//! exports_dir = "/srv/mint/invoices"
//! ```

use mint_core::invoice::SalonInfo;
use mint_core::validation::validate_tax_rate_bps;
use mint_core::{TaxRate, DEFAULT_TAX_RATE_BPS, SALON_BRAND};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "front-desk.toml";

/// Preference file name inside the platform config directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Details printed on invoices and page headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalonSettings {
    pub name: String,
    pub address: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Sales tax in basis points (800 = 8%).
    pub tax_rate_bps: u32,
}

impl Default for SalonSettings {
    fn default() -> Self {
        let info = SalonInfo::default();
        SalonSettings {
            name: SALON_BRAND.to_string(),
            address: info.address,
            phone: None,
            email: None,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Start with the demo clients, services and bookings.
    pub seed_demo: bool,
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings { seed_demo: true }
    }
}

/// Filesystem locations. Unset entries fall back to platform directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub exports_dir: Option<PathBuf>,
    pub preferences_file: Option<PathBuf>,
}

// =============================================================================
// App Config
// =============================================================================

/// Complete front-desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub salon: SalonSettings,

    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub paths: PathSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (front-desk.toml)
    /// 3. `MINT_*` environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading front-desk config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.salon.name.trim().is_empty() {
            return Err(ConfigError::Invalid("salon.name must not be empty".into()));
        }

        validate_tax_rate_bps(self.salon.tax_rate_bps)
            .map_err(|e| ConfigError::Invalid(format!("salon.tax_rate_bps: {}", e)))?;

        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".into()));
        }

        Ok(())
    }

    /// Applies `MINT_*` overrides read through `lookup`.
    ///
    /// [`AppConfig::load`] passes the process environment; tests pass a map.
    /// Values that fail to parse are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("MINT_BIND_ADDR") {
            debug!(bind_addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("MINT_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!(port = %port, "Ignoring invalid MINT_PORT"),
            }
        }

        if let Some(name) = lookup("MINT_SALON_NAME") {
            self.salon.name = name;
        }

        if let Some(bps) = lookup("MINT_TAX_RATE_BPS") {
            match bps.parse::<u32>() {
                Ok(v) => self.salon.tax_rate_bps = v,
                Err(_) => warn!(value = %bps, "Ignoring invalid MINT_TAX_RATE_BPS"),
            }
        }

        if let Some(seed) = lookup("MINT_SEED_DEMO") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.data.seed_demo = true,
                "0" | "false" | "no" => self.data.seed_demo = false,
                _ => warn!(value = %seed, "Ignoring invalid MINT_SEED_DEMO"),
            }
        }

        if let Some(dir) = lookup("MINT_EXPORTS_DIR") {
            self.paths.exports_dir = Some(PathBuf::from(dir));
        }

        if let Some(file) = lookup("MINT_PREFERENCES_FILE") {
            self.paths.preferences_file = Some(PathBuf::from(file));
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "mintsalon", "front-desk")
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.port)
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.salon.tax_rate_bps)
    }

    /// Salon header details for invoices.
    pub fn salon_info(&self) -> SalonInfo {
        SalonInfo {
            name: self.salon.name.clone(),
            address: self.salon.address.clone(),
            phone: self.salon.phone.clone(),
            email: self.salon.email.clone(),
        }
    }

    /// Directory invoices are written to.
    pub fn exports_dir(&self) -> PathBuf {
        if let Some(dir) = &self.paths.exports_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(|d| d.join("MintSalon Invoices")))
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("invoices")))
            .unwrap_or_else(|| Path::new("invoices").to_path_buf())
    }

    /// File the UI preferences are kept in.
    pub fn preferences_file(&self) -> PathBuf {
        if let Some(file) = &self.paths.preferences_file {
            return file.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE_NAME))
            .unwrap_or_else(|| Path::new(PREFERENCES_FILE_NAME).to_path_buf())
    }
}
