//! Package version lookups against an npm-compatible registry.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Resolves the version to install when a step does not pin one.
pub trait VersionResolver {
    /// Returns the registry's current "latest" version of `package`.
    fn latest_version(&self, package: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct LatestVersion {
    version: String,
}

/// Queries `<base_url>/<package>/latest` over HTTP.
pub struct NpmRegistry {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl NpmRegistry {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(anyhow::anyhow!("failed to build HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn latest_url(&self, package: &str) -> String {
        format!("{}/{}/latest", self.base_url, package)
    }
}

impl VersionResolver for NpmRegistry {
    fn latest_version(&self, package: &str) -> Result<String> {
        let network_failure =
            |e: String| Error::NetworkFailure { package: package.to_string(), e };

        let url = self.latest_url(package);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_failure(e.to_string()))?;
        if !response.status().is_success() {
            return Err(network_failure(format!("HTTP {}", response.status())));
        }
        let latest: LatestVersion =
            response.json().map_err(|e| network_failure(e.to_string()))?;
        Ok(latest.version)
    }
}
