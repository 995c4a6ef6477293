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

//! Data models for the HubSpot v1 contacts and contact properties APIs.

use serde::{Deserialize, Serialize};

use crate::{
    common::enums::{HubSpotFieldType, HubSpotPropertyType},
    properties::options::EnumerationOption,
};

/// A contact property definition in the shape the properties API expects.
///
/// `description`, `fieldType` and `options` are omitted entirely when unset
/// rather than sent as empty values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSpotPropertyDef {
    /// The property name.
    pub name: String,
    /// The label shown in the HubSpot UI.
    pub label: String,
    /// The remote storage type.
    #[serde(rename = "type")]
    pub property_type: HubSpotPropertyType,
    /// The group the property belongs to.
    pub group_name: String,
    /// Optional help text for the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The form field type, absent for plain enumerations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<HubSpotFieldType>,
    /// Options for enumeration properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<EnumerationOption>,
}

/// A single property entry in a contact sync payload.
///
/// A `None` value serializes as JSON `null`, which clears the remote value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyUpdate {
    /// The property name.
    pub property: String,
    /// The coerced upload value.
    pub value: Option<serde_json::Value>,
}

/// The request payload for contact create-or-update and profile update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// One entry per registered property, in registration order.
    pub properties: Vec<PropertyUpdate>,
}

/// The response returned by the contact create-or-update endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPushResponse {
    /// The HubSpot contact VID.
    pub vid: i64,
    /// Whether the push created a new contact.
    #[serde(default)]
    pub is_new: bool,
}

/// A property definition as listed by the properties API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProperty {
    /// The property name.
    pub name: String,
    /// The group the property belongs to.
    #[serde(default)]
    pub group_name: String,
}

/// A property group as listed by the groups API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGroup {
    /// The group name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::common::testing::load_test_json;

    #[rstest]
    fn test_property_def_serialization_full() {
        let def = HubSpotPropertyDef {
            name: "lifecycle_tier".to_string(),
            label: "Lifecycle Tier".to_string(),
            property_type: HubSpotPropertyType::Enumeration,
            group_name: "your_group".to_string(),
            description: Some("Billing tier".to_string()),
            field_type: None,
            options: vec![EnumerationOption::new("gold", "Gold")],
        };

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "lifecycle_tier",
                "label": "Lifecycle Tier",
                "type": "enumeration",
                "groupName": "your_group",
                "description": "Billing tier",
                "options": [
                    {
                        "value": "gold",
                        "label": "Gold",
                        "displayOrder": -1,
                        "description": null,
                        "hidden": false,
                    }
                ],
            })
        );
    }

    #[rstest]
    fn test_property_def_serialization_omits_unset_fields() {
        let def = HubSpotPropertyDef {
            name: "region".to_string(),
            label: "Region".to_string(),
            property_type: HubSpotPropertyType::String,
            group_name: "your_group".to_string(),
            description: None,
            field_type: Some(HubSpotFieldType::Text),
            options: Vec::new(),
        };

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "region",
                "label": "Region",
                "type": "string",
                "groupName": "your_group",
                "fieldType": "text",
            })
        );
    }

    #[rstest]
    fn test_property_update_serializes_none_as_null() {
        let update = PropertyUpdate {
            property: "region".to_string(),
            value: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"property":"region","value":null}"#);
    }

    #[rstest]
    fn test_contact_push_response_from_json() {
        let json = load_test_json("http_push_contact.json");

        let response: ContactPushResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.vid, 3_234_574);
        assert!(response.is_new);
    }

    #[rstest]
    fn test_contact_push_response_is_new_defaults_to_false() {
        let response: ContactPushResponse = serde_json::from_str(r#"{"vid": 11}"#).unwrap();
        assert!(!response.is_new);
    }

    #[rstest]
    fn test_remote_property_tolerates_extra_fields() {
        let raw = r#"{"name": "legacy_tier", "groupName": "your_group", "label": "Legacy", "readOnlyValue": false}"#;
        let remote: RemoteProperty = serde_json::from_str(raw).unwrap();
        assert_eq!(remote.name, "legacy_tier");
        assert_eq!(remote.group_name, "your_group");
    }

    #[rstest]
    fn test_remote_property_group_name_defaults_to_empty() {
        let remote: RemoteProperty = serde_json::from_str(r#"{"name": "email"}"#).unwrap();
        assert_eq!(remote.group_name, "");
    }

    #[rstest]
    fn test_remote_groups_from_json() {
        let json = load_test_json("http_list_groups.json");

        let groups: Vec<RemoteGroup> = serde_json::from_str(&json).unwrap();
        assert!(groups.iter().any(|g| g.name == "your_group"));
        assert!(groups.iter().any(|g| g.name == "contactinformation"));
    }
}
