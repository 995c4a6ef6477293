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

use chrono::Utc;
use hubsync_hubspot::{
    AttributeSource, FieldValue, HubSpotSyncClient, PropertyDef, PropertyGroup, PropertyValue,
    UserProperty, UserPropertyManager, UserRecord,
};
use tracing::level_filters::LevelFilter;

struct DemoAccount {
    name: String,
}

impl AttributeSource for DemoAccount {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Value(self.name.as_str().into())),
            _ => None,
        }
    }
}

struct DemoUser {
    email: String,
    first_name: String,
    is_trial: bool,
    account: DemoAccount,
}

impl AttributeSource for DemoUser {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "email" => Some(FieldValue::Value(self.email.as_str().into())),
            "first_name" => Some(FieldValue::Value(self.first_name.as_str().into())),
            "is_trial" => Some(FieldValue::Value(self.is_trial.into())),
            "account" => Some(FieldValue::Record(&self.account)),
            _ => None,
        }
    }
}

impl UserRecord for DemoUser {
    fn email(&self) -> &str {
        &self.email
    }
}

fn build_manager() -> anyhow::Result<UserPropertyManager> {
    let mut manager =
        UserPropertyManager::with_groups(vec![PropertyGroup::new("demo_api", "Demo API Data")]);

    manager.register(UserProperty::accessor(
        PropertyDef::new("firstname", "varchar", "First name", "contactinformation").built_in(),
        "first_name",
    )?)?;
    manager.register(UserProperty::accessor(
        PropertyDef::new("demo_account_name", "varchar", "Account name", "demo_api"),
        "account.name",
    )?)?;
    manager.register(UserProperty::accessor(
        PropertyDef::new("demo_is_trial", "bool", "Is trial", "demo_api"),
        "is_trial",
    )?)?;
    manager.register(UserProperty::function_no_args(
        PropertyDef::new("demo_last_synced", "datetime", "Last synced", "demo_api"),
        || Some(PropertyValue::DateTime(Utc::now())),
    )?)?;

    Ok(manager)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let client = HubSpotSyncClient::from_env(build_manager()?)?;

    client.sync_property_groups().await?;
    client.sync_properties().await?;

    let user = DemoUser {
        email: "jane@example.com".to_string(),
        first_name: "Jane".to_string(),
        is_trial: false,
        account: DemoAccount {
            name: "Example Pty Ltd".to_string(),
        },
    };

    let response = client.sync_user(&user).await?;
    tracing::info!(
        "Synced contact vid={} is_new={}",
        response.vid,
        response.is_new
    );

    Ok(())
}
