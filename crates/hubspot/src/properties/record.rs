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

//! Application record traits and dotted-path attribute lookup.

use chrono::{DateTime, NaiveDate, Utc};

/// A scalar value extracted from an application record.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A text value.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
    /// A UTC timestamp.
    DateTime(DateTime<Utc>),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for PropertyValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

/// A single step of a dotted-path lookup: either another record to descend
/// into, or a terminal scalar value.
pub enum FieldValue<'a> {
    /// A nested record to continue the walk through.
    Record(&'a dyn AttributeSource),
    /// A terminal scalar value.
    Value(PropertyValue),
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(_) => f.write_str("Record(..)"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// A record whose fields can be looked up by name.
///
/// Implementations back the dotted-path accessors used by property
/// definitions, such as `"company.name"`.
pub trait AttributeSource {
    /// Returns the named field, or `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// An application user record which can be synchronized as a HubSpot contact.
pub trait UserRecord: AttributeSource {
    /// Returns the email address identifying this user in HubSpot.
    fn email(&self) -> &str;
}

/// Resolves a dotted attribute path against a record.
///
/// Each path segment except the last must yield a nested record; the last
/// must yield a scalar. Any miss along the way is logged at debug level and
/// resolves to `None` rather than an error, so records missing optional
/// relations simply upload no value.
#[must_use]
pub fn resolve_path(record: &dyn AttributeSource, path: &str) -> Option<PropertyValue> {
    let mut current = record;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        match current.field(segment) {
            Some(FieldValue::Record(next)) => {
                if segments.peek().is_none() {
                    tracing::debug!("Accessor path '{path}' ends on a nested record");
                    return None;
                }
                current = next;
            }
            Some(FieldValue::Value(value)) => {
                if segments.peek().is_some() {
                    tracing::debug!(
                        "Accessor path '{path}' hit scalar at segment '{segment}' with segments remaining"
                    );
                    return None;
                }
                return Some(value);
            }
            None => {
                tracing::debug!("Accessor path '{path}' missing segment '{segment}'");
                return None;
            }
        }
    }

    None
}
