// Site configuration
//
// Read from environment variables with local-development defaults:
//   FIRM_NAME      display name used in page titles (default: KVNR Law Associates)
//   SITE_BASE_URL  absolute origin for structured-data URLs (default: https://kvnr-law.com)
//   PORT           API server port (default: 3000)
//   OUTPUT_DIR     static page output directory (default: dist)

use std::path::PathBuf;

pub const DEFAULT_FIRM_NAME: &str = "KVNR Law Associates";
pub const DEFAULT_BASE_URL: &str = "https://kvnr-law.com";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub firm_name: String,
    /// No trailing slash
    pub base_url: String,
    pub port: u16,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            firm_name: DEFAULT_FIRM_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            firm_name: get("FIRM_NAME").unwrap_or(defaults.firm_name),
            base_url: get("SITE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            output_dir: get("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }
}
