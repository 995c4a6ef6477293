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

//! A minimal HTTP abstraction over [reqwest].
//!
//! The module exposes [`HttpTransport`], an object-safe seam through which
//! all outbound requests flow. Production code uses the [`ReqwestTransport`]
//! implementation; tests substitute recording or scripted transports so that
//! request handling can be exercised without real sockets.
//!
//! Responses are returned raw ([`HttpResponse`]): status dispatch and body
//! decoding belong to the API clients built on top of this crate.

use std::{collections::HashMap, fmt::Debug, time::Duration};

use bytes::Bytes;
use reqwest::{
    Method, StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Represents the HTTP methods supported by the transport layer.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Errors returned by the HTTP transport layer.
///
/// Transport errors carry the underlying failure as a message rather than the
/// source error itself so the type stays `Clone` and crosses async boundaries
/// freely.
#[derive(Clone, Debug, Error)]
pub enum HttpClientError {
    /// An error occurred while executing the request or reading the response.
    #[error("HTTP error occurred: {0}")]
    Error(String),
    /// The request exceeded the configured timeout.
    #[error("HTTP request timed out: {0}")]
    TimeoutError(String),
    /// The injected call-record store failed to read or write.
    #[error("Call record store error: {0}")]
    RecordStoreError(String),
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::TimeoutError(error.to_string())
        } else {
            Self::Error(error.to_string())
        }
    }
}

/// Represents a raw HTTP response: status code, headers, and body bytes.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The raw response body.
    pub body: Bytes,
}

/// An object-safe seam for issuing HTTP requests.
///
/// Non-success status codes are not errors at this layer: the transport
/// returns whatever the server answered and leaves status handling to the
/// caller. Errors are reserved for failures to obtain a response at all.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the response
    /// body could not be read.
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Option<HashMap<String, String>>,
        params: Option<Vec<(String, String)>>,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, HttpClientError>;
}

/// The production [`HttpTransport`] backed by a shared [`reqwest::Client`].
///
/// The client carries default headers (user agent and the like) and an
/// optional request timeout. It performs no retries and no status handling.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new [`ReqwestTransport`] with the given default headers and
    /// an optional request timeout in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if a default header name or value is invalid, or if
    /// the underlying client cannot be constructed.
    pub fn new(
        default_headers: HashMap<String, String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, HttpClientError> {
        let mut header_map = HeaderMap::new();
        for (key, value) in &default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HttpClientError::Error(format!("Invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HttpClientError::Error(format!("Invalid header value: {e}")))?;
            header_map.insert(name, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(header_map);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Option<HashMap<String, String>>,
        params: Option<Vec<(String, String)>>,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, HttpClientError> {
        let mut request = self.client.request(method.into(), url);

        if let Some(headers) = headers {
            for (key, value) in &headers {
                request = request.header(key.as_str(), value.as_str());
            }
        }
        if let Some(params) = params {
            request = request.query(&params);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_owned())))
            .collect();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
