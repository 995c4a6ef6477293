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

//! Response decoding helpers shared by the HubSpot HTTP client.

use hubsync_network::http::HttpResponse;
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

use crate::http::error::{HubSpotErrorResponse, HubSpotHttpError};

/// Decodes a successful response body, or translates an error response.
///
/// # Errors
///
/// Returns an error if the status is not a success, or if the body cannot be
/// deserialized into `T`.
pub fn decode_response<T: DeserializeOwned>(
    response: &HttpResponse,
) -> Result<T, HubSpotHttpError> {
    if response.status.is_success() {
        serde_json::from_slice(&response.body).map_err(Into::into)
    } else {
        Err(error_from_response(response))
    }
}

/// Checks that the response carries a success status, discarding the body.
///
/// # Errors
///
/// Returns an error if the status is not a success.
pub fn expect_success(response: &HttpResponse) -> Result<(), HubSpotHttpError> {
    if response.status.is_success() {
        Ok(())
    } else {
        Err(error_from_response(response))
    }
}

/// Checks that the response carries exactly the expected status.
///
/// # Errors
///
/// Returns an error if the status differs from `expected`.
pub fn expect_status(
    response: &HttpResponse,
    expected: StatusCode,
) -> Result<(), HubSpotHttpError> {
    if response.status == expected {
        Ok(())
    } else {
        Err(error_from_response(response))
    }
}

/// Serializes a model with its `name` field stripped.
///
/// The named group and property endpoints carry the name in the URL path, so
/// the request body must not repeat it.
///
/// # Errors
///
/// Returns an error if the model cannot be serialized.
pub fn serialize_without_name<T: Serialize>(model: &T) -> Result<Vec<u8>, HubSpotHttpError> {
    let mut value = serde_json::to_value(model)?;
    if let Some(object) = value.as_object_mut() {
        object.remove("name");
    }
    serde_json::to_vec(&value).map_err(Into::into)
}

/// Translates a non-success response into a typed error.
///
/// HubSpot error bodies decode into [`HubSpotErrorResponse`]; anything else
/// surfaces as an unexpected status carrying the raw body.
fn error_from_response(response: &HttpResponse) -> HubSpotHttpError {
    match serde_json::from_slice::<HubSpotErrorResponse>(&response.body) {
        Ok(error) => error.into(),
        Err(_) => HubSpotHttpError::UnexpectedStatus {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).to_string(),
        },
    }
}
