//! Site server configuration from environment variables.
//!
//! Every setting is optional; missing or unparsable values fall back to the
//! defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: String,
    pub port: u16,
    /// Static files served under `/assets` (images, résumé PDF).
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Read `SITE_ADDR`, `PORT`, and `ASSETS_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = non_empty(lookup("SITE_ADDR")).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let port = non_empty(lookup("PORT"))
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let assets_dir = non_empty(lookup("ASSETS_DIR")).map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);
        Self { addr, port, assets_dir }
    }

    /// `addr:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
