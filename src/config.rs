use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const DEFAULT_TLS_CERT_FILENAME: &str = "tls.cert";
const DEFAULT_MACAROON_FILENAME: &str = "admin.macaroon";
const DEFAULT_RPC_HOST_PORT: &str = "localhost:8080";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub lnd: LndConfig,
    pub reporting: ReportingConfig,
}

/// Connection settings for the lnd REST gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LndConfig {
    /// host:port of the REST listener, optionally with a scheme
    pub rpcserver: String,
    pub lnddir: PathBuf,
    pub tlscertpath: Option<PathBuf>,
    pub macaroonpath: Option<PathBuf>,
    pub chain: String,
    pub network: String,
    pub no_macaroons: bool,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Page size for the 30-day history behind the channel listing
    pub forwarding_max_events: u32,
    /// Default page size for the contract listing
    pub contracts_max_events: u32,
}

impl Default for LndConfig {
    fn default() -> Self {
        Self {
            rpcserver: DEFAULT_RPC_HOST_PORT.to_string(),
            lnddir: default_lnd_dir(),
            tlscertpath: None,
            macaroonpath: None,
            chain: "bitcoin".to_string(),
            network: "mainnet".to_string(),
            no_macaroons: false,
            timeout_seconds: 60,
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            forwarding_max_events: 50_000,
            contracts_max_events: 100,
        }
    }
}

/// `$HOME/.lnd`, or `.lnd` relative to the working directory without a home
pub fn default_lnd_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".lnd")
}

impl LndConfig {
    /// Explicit TLS cert path, else `<lnddir>/tls.cert`
    pub fn tls_cert_path(&self) -> PathBuf {
        self.tlscertpath
            .clone()
            .unwrap_or_else(|| self.lnddir.join(DEFAULT_TLS_CERT_FILENAME))
    }

    /// Explicit macaroon path, else `<lnddir>/data/chain/<chain>/<network>/admin.macaroon`
    pub fn macaroon_path(&self) -> PathBuf {
        self.macaroonpath.clone().unwrap_or_else(|| {
            self.lnddir
                .join("data")
                .join("chain")
                .join(&self.chain)
                .join(&self.network)
                .join(DEFAULT_MACAROON_FILENAME)
        })
    }

    /// REST base URL, defaulting to https when no scheme is given
    pub fn base_url(&self) -> String {
        let server = self.rpcserver.trim_end_matches('/');
        if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("https://{}", server)
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let lnd = LndConfig::default();
        let reporting = ReportingConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("lnd.rpcserver", lnd.rpcserver)?
            .set_default("lnd.lnddir", lnd.lnddir.to_string_lossy().to_string())?
            .set_default("lnd.chain", lnd.chain)?
            .set_default("lnd.network", lnd.network)?
            .set_default("lnd.no_macaroons", lnd.no_macaroons)?
            .set_default("lnd.timeout_seconds", lnd.timeout_seconds)?
            .set_default(
                "reporting.forwarding_max_events",
                reporting.forwarding_max_events as i64,
            )?
            .set_default(
                "reporting.contracts_max_events",
                reporting.contracts_max_events as i64,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // LNB_LND__RPCSERVER, LNB_REPORTING__CONTRACTS_MAX_EVENTS, ...
            .add_source(
                config::Environment::with_prefix("LNB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get config values for CLI defaults, falling back to built-in defaults
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }
}
