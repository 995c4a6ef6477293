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

//! API key credential for the HubSpot `hapikey` authentication scheme.

/// A HubSpot API key.
///
/// The key is appended to every request as the `hapikey` query parameter.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new [`ApiKey`] instance.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the query parameter pair carrying this key.
    #[must_use]
    pub fn as_query_param(&self) -> (String, String) {
        ("hapikey".to_string(), self.0.clone())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(stringify!(ApiKey)).field(&"<redacted>").finish()
    }
}
