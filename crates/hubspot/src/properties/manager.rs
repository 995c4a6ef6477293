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

//! Registry of contact properties and their groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    http::models::{PropertyUpdate, SyncPayload},
    properties::{PropertyError, property::UserProperty, record::UserRecord},
};

/// A HubSpot contact property group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroup {
    /// The internal group name.
    pub name: String,
    /// The label shown in the HubSpot UI.
    pub display_name: String,
}

impl PropertyGroup {
    /// Creates a new [`PropertyGroup`] instance.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// The registry of contact properties synchronized to HubSpot.
///
/// Properties keep their registration order, which determines the order of
/// entries in contact sync payloads.
#[derive(Clone, Debug, Default)]
pub struct UserPropertyManager {
    properties: IndexMap<String, UserProperty>,
    groups: Vec<PropertyGroup>,
}

impl UserPropertyManager {
    /// Creates a new empty [`UserPropertyManager`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager owning the given property groups.
    #[must_use]
    pub fn with_groups(groups: Vec<PropertyGroup>) -> Self {
        Self {
            properties: IndexMap::new(),
            groups,
        }
    }

    /// Registers a property under its remote name.
    ///
    /// # Errors
    ///
    /// Returns an error if a property with the same name is already
    /// registered; the existing registration is kept.
    pub fn register(&mut self, property: UserProperty) -> Result<(), PropertyError> {
        let name = property.name().to_string();
        if self.properties.contains_key(&name) {
            return Err(PropertyError::DuplicateName(name));
        }
        self.properties.insert(name, property);
        Ok(())
    }

    /// Adds a property group owned by this manager.
    pub fn add_group(&mut self, group: PropertyGroup) {
        self.groups.push(group);
    }

    /// Returns a copy of the property groups owned by this manager.
    #[must_use]
    pub fn groups(&self) -> Vec<PropertyGroup> {
        self.groups.clone()
    }

    /// Returns the registered properties in registration order.
    pub fn properties(&self) -> impl Iterator<Item = &UserProperty> {
        self.properties.values()
    }

    /// Returns the named property, if registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UserProperty> {
        self.properties.get(name)
    }

    /// Returns the properties managed here rather than built into HubSpot.
    ///
    /// These are the properties created, updated and deleted by property
    /// reconciliation.
    pub fn custom_properties(&self) -> impl Iterator<Item = &UserProperty> {
        self.properties.values().filter(|prop| !prop.is_built_in())
    }

    /// Returns the number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns whether no properties are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Builds the contact sync payload for the given user record.
    ///
    /// Every registered property contributes an entry; properties without a
    /// value upload JSON `null` to clear the remote value.
    #[must_use]
    pub fn build_payload(&self, user: &dyn UserRecord) -> SyncPayload {
        let properties = self
            .properties
            .values()
            .map(|prop| PropertyUpdate {
                property: prop.name().to_string(),
                value: prop.format_value(user),
            })
            .collect();

        SyncPayload { properties }
    }
}
