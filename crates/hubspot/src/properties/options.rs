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

//! Option definitions for enumeration properties.

use serde::{Deserialize, Serialize};

/// A single selectable option on an enumeration property.
///
/// Serializes in the exact shape the HubSpot properties API expects; every
/// field is always present on the wire, with `description` as `null` when
/// unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationOption {
    /// The stored option value.
    pub value: String,
    /// The label shown in the HubSpot UI.
    pub label: String,
    /// Sort position among the property options, `-1` for unordered.
    pub display_order: i32,
    /// Optional help text for the option.
    pub description: Option<String>,
    /// Whether the option is hidden from forms.
    pub hidden: bool,
}

impl EnumerationOption {
    /// Creates a new [`EnumerationOption`] instance.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            display_order: -1,
            description: None,
            hidden: false,
        }
    }

    /// Sets the display order.
    #[must_use]
    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Sets the option description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether the option is hidden.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_defaults() {
        let option = EnumerationOption::new("gold", "Gold");
        assert_eq!(option.value, "gold");
        assert_eq!(option.label, "Gold");
        assert_eq!(option.display_order, -1);
        assert_eq!(option.description, None);
        assert!(!option.hidden);
    }

    #[rstest]
    fn test_builders() {
        let option = EnumerationOption::new("gold", "Gold")
            .with_display_order(2)
            .with_description("Top tier")
            .with_hidden(true);
        assert_eq!(option.display_order, 2);
        assert_eq!(option.description, Some("Top tier".to_string()));
        assert!(option.hidden);
    }

    #[rstest]
    fn test_serialization_always_includes_every_field() {
        let option = EnumerationOption::new("gold", "Gold");
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": "gold",
                "label": "Gold",
                "displayOrder": -1,
                "description": null,
                "hidden": false,
            })
        );
    }

    #[rstest]
    fn test_deserialization_roundtrip() {
        let raw = r#"{"value":"t1","label":"Tier 1","displayOrder":0,"description":"first","hidden":false}"#;
        let option: EnumerationOption = serde_json::from_str(raw).unwrap();
        assert_eq!(option.value, "t1");
        assert_eq!(option.display_order, 0);
        assert_eq!(option.description, Some("first".to_string()));
    }
}
