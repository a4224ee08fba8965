//! Process configuration, read from command-line flags with environment fallbacks.

use crate::contacts::store::DecodePolicy;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "contacts-service")]
#[command(about = "JSON-file backed contacts HTTP service")]
#[command(version)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "CONTACTS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// JSON file holding the contact collection
    #[arg(long, env = "CONTACTS_DATA_FILE", default_value = "contacts.json")]
    pub data_file: PathBuf,

    /// Fail requests when the data file cannot be decoded instead of treating it as empty
    #[arg(long, env = "CONTACTS_STRICT")]
    pub strict: bool,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, env = "CONTACTS_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn decode_policy(&self) -> DecodePolicy {
        if self.strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lenient
        }
    }
}
