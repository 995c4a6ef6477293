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

//! Contact synchronization client for the [HubSpot](https://www.hubspot.com) v1 CRM API.
//!
//! The `hubsync-hubspot` crate provides the domain layer of hubsync:
//!
//! - A typed contact property model ([`properties`]): properties declare a
//!   native type which is mapped deterministically onto the remote `type` /
//!   `fieldType` pair, and bind one of three value-sourcing strategies
//!   (attribute path, function, constant) used to pull values out of user
//!   records at sync time.
//! - A registration manager which assembles contact sync payloads and drives
//!   property and group reconciliation.
//! - An HTTP client ([`http::client::HubSpotSyncClient`]) over the
//!   rate-limited requester from `hubsync-network`, covering the contact
//!   push and property/group reconciliation endpoints.
//!
//! The official HubSpot v1 API reference can be found at
//! <https://legacydocs.hubspot.com/docs/overview>.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;
pub mod properties;

// Re-exports
pub use crate::{
    common::enums::{HubSpotFieldType, HubSpotPropertyType, NativeType},
    config::HubSpotSyncConfig,
    http::{client::HubSpotSyncClient, error::HubSpotHttpError},
    properties::{
        PropertyError,
        manager::{PropertyGroup, UserPropertyManager},
        options::EnumerationOption,
        property::{PropertyDef, UserProperty},
        record::{AttributeSource, FieldValue, PropertyValue, UserRecord},
    },
};
