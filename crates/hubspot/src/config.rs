// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration structures for the HubSpot sync client.

use hubsync_network::ratelimiter::{
    DEFAULT_CALL_RECORD_KEY, DEFAULT_MAX_CALLS, DEFAULT_WINDOW_SECS,
};

use crate::common::consts::HUBSPOT_HTTP_URL;

/// Returns the value of the environment variable for the given `key`.
///
/// # Errors
///
/// Returns an error if the environment variable is not set.
pub fn get_env_var(key: &str) -> anyhow::Result<String> {
    match std::env::var(key) {
        Ok(var) => Ok(var),
        Err(_) => anyhow::bail!("environment variable '{key}' must be set"),
    }
}

/// Configuration for the HubSpot sync client.
#[derive(Clone, Debug)]
pub struct HubSpotSyncConfig {
    /// Optional API key; read from `HUBSPOT_API_KEY` when `None`.
    pub api_key: Option<String>,
    /// Override for the HTTP API URL.
    pub base_url: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// The number of calls permitted inside the rate window.
    pub max_calls: u32,
    /// The rate window length in seconds.
    pub window_secs: f64,
    /// The store key under which call records are kept.
    ///
    /// Requesters sharing this key share the call quota.
    pub call_record_key: String,
}

impl Default for HubSpotSyncConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: Some(60),
            max_calls: DEFAULT_MAX_CALLS,
            window_secs: DEFAULT_WINDOW_SECS,
            call_record_key: DEFAULT_CALL_RECORD_KEY.to_string(),
        }
    }
}

impl HubSpotSyncConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the API key from the configuration or the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no key is configured and the `HUBSPOT_API_KEY`
    /// environment variable is not set.
    pub fn api_key(&self) -> anyhow::Result<String> {
        match &self.api_key {
            Some(key) => Ok(key.clone()),
            None => get_env_var("HUBSPOT_API_KEY"),
        }
    }

    /// Returns the HTTP API URL, respecting overrides.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| HUBSPOT_HTTP_URL.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = HubSpotSyncConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_secs, Some(60));
        assert_eq!(config.max_calls, 8);
        assert_eq!(config.window_secs, 10.0);
        assert_eq!(config.call_record_key, "hub_api_calls");
        assert_eq!(config.http_url(), "https://api.hubapi.com");
    }

    #[rstest]
    fn test_http_url_respects_override() {
        let config = HubSpotSyncConfig {
            base_url: Some("http://127.0.0.1:8080".to_string()),
            ..Default::default()
        };
        assert_eq!(config.http_url(), "http://127.0.0.1:8080");
    }

    #[rstest]
    fn test_api_key_prefers_configured_value() {
        let config = HubSpotSyncConfig {
            api_key: Some("demo-key".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_key().unwrap(), "demo-key");
    }

    #[rstest]
    fn test_get_env_var_reports_missing_key() {
        let result = get_env_var("HUBSYNC_SURELY_UNSET_VARIABLE");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("'HUBSYNC_SURELY_UNSET_VARIABLE' must be set")
        );
    }
}
