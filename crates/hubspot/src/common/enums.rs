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

//! Enumerations for the HubSpot property type system.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The native type of a locally defined property.
///
/// Each native type determines both how values are coerced before upload
/// and which remote type/field type pair HubSpot is told to use.
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
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    /// A boolean flag, uploaded as a `"true"`/`"false"` string.
    Bool,
    /// A calendar date, uploaded as epoch milliseconds at midnight UTC.
    Date,
    /// A timestamp, uploaded as epoch milliseconds.
    DateTime,
    /// A numeric value.
    Number,
    /// A short free-form string.
    Varchar,
    /// A long free-form string.
    Textarea,
    /// A value restricted to a fixed set of options.
    Enumeration,
}

/// The remote property type HubSpot stores for a property.
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
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HubSpotPropertyType {
    /// Free-form string storage.
    String,
    /// Numeric storage.
    Number,
    /// Date storage (midnight timestamps).
    Date,
    /// Timestamp storage.
    DateTime,
    /// Option-constrained storage.
    Enumeration,
}

/// The remote form-field type HubSpot renders for a property.
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
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HubSpotFieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// Date picker.
    Date,
    /// Numeric input.
    Number,
    /// Yes/no checkbox.
    BooleanCheckbox,
}

impl NativeType {
    /// Returns the remote property type and field type HubSpot uses for this
    /// native type.
    ///
    /// Enumerations carry no intrinsic field type, so the second element is
    /// `None` for [`NativeType::Enumeration`].
    #[must_use]
    pub const fn remote_types(self) -> (HubSpotPropertyType, Option<HubSpotFieldType>) {
        match self {
            Self::Bool => (
                HubSpotPropertyType::Enumeration,
                Some(HubSpotFieldType::BooleanCheckbox),
            ),
            Self::Date => (HubSpotPropertyType::Date, Some(HubSpotFieldType::Date)),
            Self::DateTime => (HubSpotPropertyType::DateTime, Some(HubSpotFieldType::Date)),
            Self::Number => (HubSpotPropertyType::Number, Some(HubSpotFieldType::Number)),
            Self::Varchar => (HubSpotPropertyType::String, Some(HubSpotFieldType::Text)),
            Self::Textarea => (HubSpotPropertyType::String, Some(HubSpotFieldType::Textarea)),
            Self::Enumeration => (HubSpotPropertyType::Enumeration, None),
        }
    }
}
