use clap::Args;
use std::path::PathBuf;

use crate::config::LndConfig;

/// Node connection flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// host:port of the lnd REST listener
    #[arg(long, global = true)]
    pub rpcserver: Option<String>,

    /// Path to lnd's base directory
    #[arg(long, global = true)]
    pub lnddir: Option<PathBuf>,

    /// Path to TLS certificate
    #[arg(long, global = true)]
    pub tlscertpath: Option<PathBuf>,

    /// Path to macaroon file
    #[arg(long, global = true)]
    pub macaroonpath: Option<PathBuf>,

    /// The chain lnd is running on, e.g. bitcoin
    #[arg(long, short = 'c', global = true)]
    pub chain: Option<String>,

    /// The network lnd is running on, e.g. mainnet, testnet
    #[arg(long, short = 'n', global = true)]
    pub network: Option<String>,

    /// Disable macaroon authentication
    #[arg(long, global = true)]
    pub no_macaroons: bool,
}

impl ConnectionArgs {
    /// CLI arguments override config values
    pub fn apply(&self, config: &mut LndConfig) {
        if let Some(rpcserver) = &self.rpcserver {
            config.rpcserver = rpcserver.clone();
        }
        if let Some(lnddir) = &self.lnddir {
            config.lnddir = lnddir.clone();
        }
        if let Some(tlscertpath) = &self.tlscertpath {
            config.tlscertpath = Some(tlscertpath.clone());
        }
        if let Some(macaroonpath) = &self.macaroonpath {
            config.macaroonpath = Some(macaroonpath.clone());
        }
        if let Some(chain) = &self.chain {
            config.chain = chain.clone();
        }
        if let Some(network) = &self.network {
            config.network = network.clone();
        }
        if self.no_macaroons {
            config.no_macaroons = true;
        }
    }
}
