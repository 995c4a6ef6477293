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

use std::sync::LazyLock;

/// The production HubSpot HTTP API base URL.
pub const HUBSPOT_HTTP_URL: &str = "https://api.hubapi.com";

/// Path prefix for the v1 contacts API.
pub const CONTACTS_PATH: &str = "/contacts/v1/contact";

/// Path prefix for the v1 contact properties API.
pub const PROPERTIES_PATH: &str = "/properties/v1/contacts";

/// User agent sent with every HTTP request.
pub static HUBSYNC_USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("HubSync/{}", env!("CARGO_PKG_VERSION")));
