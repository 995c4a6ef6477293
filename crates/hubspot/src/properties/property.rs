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

//! Contact property definitions with value sources and type coercion.

use std::{str::FromStr, sync::Arc};

use chrono::{NaiveDate, NaiveTime};

use crate::{
    common::enums::{HubSpotFieldType, HubSpotPropertyType, NativeType},
    http::models::HubSpotPropertyDef,
    properties::{
        PropertyError,
        options::EnumerationOption,
        record::{self, PropertyValue, UserRecord},
    },
};

/// A value function taking the user record being synchronized.
pub type UserValueFn = dyn Fn(&dyn UserRecord) -> Option<PropertyValue> + Send + Sync;

/// A value function taking no arguments.
pub type PlainValueFn = dyn Fn() -> Option<PropertyValue> + Send + Sync;

/// A callable value source.
#[derive(Clone)]
pub enum ValueFn {
    /// Computes the value from the user record.
    WithUser(Arc<UserValueFn>),
    /// Computes the value independently of the user record.
    NoArgs(Arc<PlainValueFn>),
}

impl std::fmt::Debug for ValueFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WithUser(_) => f.write_str("WithUser(..)"),
            Self::NoArgs(_) => f.write_str("NoArgs(..)"),
        }
    }
}

/// Where a property obtains its value at sync time.
#[derive(Clone, Debug)]
pub enum ValueSource {
    /// A dotted attribute path resolved against the user record.
    Accessor(String),
    /// A function invoked for each sync.
    Function(ValueFn),
    /// A fixed value shared by every user.
    Constant(PropertyValue),
}

/// The inputs needed to define a contact property.
#[derive(Clone, Debug)]
pub struct PropertyDef {
    /// The remote property name.
    pub name: String,
    /// The native type string, such as `"varchar"` or `"datetime"`.
    pub native_type: String,
    /// The label shown in the HubSpot UI.
    pub label: String,
    /// The property group this property belongs to.
    pub group_name: String,
    /// Optional help text for the property.
    pub description: Option<String>,
    /// Whether the property is built into HubSpot rather than managed here.
    pub built_in: bool,
    /// Options for enumeration properties.
    pub options: Vec<EnumerationOption>,
}

impl PropertyDef {
    /// Creates a new [`PropertyDef`] instance.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        native_type: impl Into<String>,
        label: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            native_type: native_type.into(),
            label: label.into(),
            group_name: group_name.into(),
            description: None,
            built_in: false,
            options: Vec::new(),
        }
    }

    /// Sets the property description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the property as built into HubSpot.
    ///
    /// Built-in properties receive values during contact sync but are never
    /// created, updated or deleted by property reconciliation.
    #[must_use]
    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self
    }

    /// Sets the options for an enumeration property.
    #[must_use]
    pub fn with_options(mut self, options: Vec<EnumerationOption>) -> Self {
        self.options = options;
        self
    }
}

/// A contact property definition bound to a value source.
///
/// Construction validates the native type and options up front, so a held
/// [`UserProperty`] always describes a well-formed remote property.
#[derive(Clone, Debug)]
pub struct UserProperty {
    name: String,
    label: String,
    description: Option<String>,
    group_name: String,
    native_type: NativeType,
    remote_type: HubSpotPropertyType,
    remote_field_type: Option<HubSpotFieldType>,
    options: Vec<EnumerationOption>,
    built_in: bool,
    source: ValueSource,
}

impl UserProperty {
    /// Creates a property whose value is read from a dotted attribute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the native type is unrecognized, or if an
    /// enumeration property has no options.
    pub fn accessor(def: PropertyDef, path: impl Into<String>) -> Result<Self, PropertyError> {
        Self::build(def, ValueSource::Accessor(path.into()))
    }

    /// Creates a property whose value is computed from the user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the native type is unrecognized, or if an
    /// enumeration property has no options.
    pub fn function<F>(def: PropertyDef, func: F) -> Result<Self, PropertyError>
    where
        F: Fn(&dyn UserRecord) -> Option<PropertyValue> + Send + Sync + 'static,
    {
        Self::build(def, ValueSource::Function(ValueFn::WithUser(Arc::new(func))))
    }

    /// Creates a property whose value is computed without the user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the native type is unrecognized, or if an
    /// enumeration property has no options.
    pub fn function_no_args<F>(def: PropertyDef, func: F) -> Result<Self, PropertyError>
    where
        F: Fn() -> Option<PropertyValue> + Send + Sync + 'static,
    {
        Self::build(def, ValueSource::Function(ValueFn::NoArgs(Arc::new(func))))
    }

    /// Creates a property with a fixed value shared by every user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native type is unrecognized, or if an
    /// enumeration property has no options.
    pub fn constant(
        def: PropertyDef,
        value: impl Into<PropertyValue>,
    ) -> Result<Self, PropertyError> {
        Self::build(def, ValueSource::Constant(value.into()))
    }

    fn build(def: PropertyDef, source: ValueSource) -> Result<Self, PropertyError> {
        let native_type = NativeType::from_str(&def.native_type)
            .map_err(|_| PropertyError::UnrecognizedNativeType(def.native_type.clone()))?;
        let (remote_type, remote_field_type) = native_type.remote_types();

        let options = match native_type {
            // HubSpot models booleans as an enumeration with two fixed options
            NativeType::Bool => vec![
                EnumerationOption::new("true", "Yes").with_display_order(1),
                EnumerationOption::new("false", "No").with_display_order(2),
            ],
            NativeType::Enumeration => {
                if def.options.is_empty() {
                    return Err(PropertyError::MissingOptions(def.name));
                }
                def.options
            }
            _ => Vec::new(),
        };

        Ok(Self {
            name: def.name,
            label: def.label,
            description: def.description,
            group_name: def.group_name,
            native_type,
            remote_type,
            remote_field_type,
            options,
            built_in: def.built_in,
            source,
        })
    }

    /// Returns the remote property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the property group name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Returns the native type.
    #[must_use]
    pub fn native_type(&self) -> NativeType {
        self.native_type
    }

    /// Returns the remote property type.
    #[must_use]
    pub fn remote_type(&self) -> HubSpotPropertyType {
        self.remote_type
    }

    /// Returns the remote field type, if any.
    #[must_use]
    pub fn remote_field_type(&self) -> Option<HubSpotFieldType> {
        self.remote_field_type
    }

    /// Returns the enumeration options.
    #[must_use]
    pub fn options(&self) -> &[EnumerationOption] {
        &self.options
    }

    /// Returns whether the property is built into HubSpot.
    #[must_use]
    pub fn is_built_in(&self) -> bool {
        self.built_in
    }

    /// Returns the remote definition used to create or update this property.
    ///
    /// Empty descriptions and absent field types are omitted entirely rather
    /// than sent as empty strings.
    #[must_use]
    pub fn describe(&self) -> HubSpotPropertyDef {
        HubSpotPropertyDef {
            name: self.name.clone(),
            label: self.label.clone(),
            property_type: self.remote_type,
            group_name: self.group_name.clone(),
            description: self.description.clone().filter(|d| !d.is_empty()),
            field_type: self.remote_field_type,
            options: self.options.clone(),
        }
    }

    /// Extracts the raw value for the given user record.
    #[must_use]
    pub fn value_for(&self, user: &dyn UserRecord) -> Option<PropertyValue> {
        match &self.source {
            ValueSource::Accessor(path) => record::resolve_path(user, path),
            ValueSource::Function(ValueFn::WithUser(func)) => func(user),
            ValueSource::Function(ValueFn::NoArgs(func)) => func(),
            ValueSource::Constant(value) => Some(value.clone()),
        }
    }

    /// Extracts and coerces the upload value for the given user record.
    ///
    /// Returns `None` when no value is available, which uploads as JSON
    /// `null` to clear the remote value.
    #[must_use]
    pub fn format_value(&self, user: &dyn UserRecord) -> Option<serde_json::Value> {
        self.value_for(user).and_then(|value| self.coerce(value))
    }

    fn coerce(&self, value: PropertyValue) -> Option<serde_json::Value> {
        match (self.native_type, value) {
            // HubSpot expects boolean checkbox values as literal strings
            (NativeType::Bool, PropertyValue::Bool(flag)) => {
                Some(serde_json::Value::from(if flag { "true" } else { "false" }))
            }
            (NativeType::Date, PropertyValue::DateTime(dt)) => {
                Some(date_to_epoch_millis(dt.date_naive()).into())
            }
            (_, PropertyValue::Bool(flag)) => Some(serde_json::Value::Bool(flag)),
            (_, PropertyValue::Int(value)) => Some(value.into()),
            (_, PropertyValue::Float(value)) => {
                if value.is_finite() {
                    Some(value.into())
                } else {
                    tracing::debug!(
                        "Dropping non-finite value {value} for property '{}'",
                        self.name
                    );
                    None
                }
            }
            (_, PropertyValue::Text(text)) => Some(serde_json::Value::String(text)),
            (_, PropertyValue::Date(date)) => Some(date_to_epoch_millis(date).into()),
            (_, PropertyValue::DateTime(dt)) => Some(dt.timestamp_millis().into()),
        }
    }
}

/// Converts a date to epoch milliseconds at midnight UTC, which is the form
/// HubSpot requires for date properties.
fn date_to_epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
