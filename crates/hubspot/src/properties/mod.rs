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

//! Local contact property definitions and value extraction.
//!
//! A [`property::UserProperty`] couples a remote HubSpot property definition
//! with a value source resolved against application user records. The
//! [`manager::UserPropertyManager`] holds the full registry and produces
//! contact sync payloads from it.

pub mod manager;
pub mod options;
pub mod property;
pub mod record;

use thiserror::Error;

/// Errors raised when defining or registering contact properties.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    /// The native type string does not name a supported type.
    #[error("Unrecognized native type '{0}'")]
    UnrecognizedNativeType(String),
    /// An enumeration property was defined without any options.
    #[error("Enumeration property '{0}' requires at least one option")]
    MissingOptions(String),
    /// A property with the same name is already registered.
    #[error("Property '{0}' is already registered")]
    DuplicateName(String),
}
