//! Endpoint configuration for the GitHub status feeds.
use url::Url;
use thiserror::Error;

pub const STATUS_BASE: &str = "https://www.githubstatus.com/";
pub const COMPONENTS_PATH: &str = "api/v2/components.json";
pub const INCIDENTS_PATH: &str = "api/v2/incidents/unresolved.json";

pub const USER_AGENT: &str = concat!("ghstatus/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid status page URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The two feeds a run reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub components: Url,
    pub incidents: Url,
}

impl Endpoints {
    /// Derive both feed URLs from a statuspage root such as `https://www.githubstatus.com/`.
    pub fn with_base_url(base: &str) -> Result<Self, ConfigError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            components: base.join(COMPONENTS_PATH)?,
            incidents: base.join(INCIDENTS_PATH)?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base_url(STATUS_BASE).expect("valid default status page URL")
    }
}
