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

//! Error structures and enumerations for the HubSpot integration.

use hubsync_network::http::HttpClientError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents the JSON structure of an error response returned by the HubSpot API.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HubSpotErrorResponse {
    /// A short status identifier, typically `"error"`.
    pub status: String,
    /// A human-readable explanation of the error condition.
    pub message: String,
}

/// A typed error enumeration for the HubSpot HTTP client.
#[derive(Debug, Clone, Error)]
pub enum HubSpotHttpError {
    /// Errors returned directly by HubSpot.
    #[error("HubSpot error {status}: {message}")]
    HubSpotError { status: String, message: String },
    /// Failure during JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    JsonError(String),
    /// Parameter validation error.
    #[error("Parameter validation error: {0}")]
    ValidationError(String),
    /// Generic network error.
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Any unknown HTTP status or unexpected response from HubSpot.
    #[error("Unexpected HTTP status code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

impl From<HttpClientError> for HubSpotHttpError {
    fn from(error: HttpClientError) -> Self {
        Self::NetworkError(error.to_string())
    }
}

impl From<String> for HubSpotHttpError {
    fn from(error: String) -> Self {
        Self::ValidationError(error)
    }
}

// Allow use of the `?` operator on `serde_json` results inside the HTTP
// client implementation by converting them into our typed error.
impl From<serde_json::Error> for HubSpotHttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error.to_string())
    }
}

impl From<HubSpotErrorResponse> for HubSpotHttpError {
    fn from(error: HubSpotErrorResponse) -> Self {
        Self::HubSpotError {
            status: error.status,
            message: error.message,
        }
    }
}
