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

//! Network communication machinery for the hubsync CRM client.
//!
//! The `hubsync-network` crate provides the transport layer shared by the
//! higher-level API clients:
//!
//! - A minimal HTTP abstraction over [reqwest] with an object-safe transport
//!   seam so that request handling can be exercised without real sockets.
//! - A sliding-window rate gate ([`ratelimiter::RateLimitedRequester`]) that
//!   throttles outbound calls against a quota of recent call timestamps held
//!   in an injected [`ratelimiter::CallRecordStore`].

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod http;
pub mod ratelimiter;

// Re-exports
pub use crate::{
    http::{HttpClientError, HttpMethod, HttpResponse, HttpTransport, ReqwestTransport},
    ratelimiter::{
        CallRecordStore, InMemoryCallRecordStore, RateLimitedRequester, RateWindow,
    },
};
