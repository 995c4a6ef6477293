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

//! Provides the HTTP client integration for the HubSpot v1 REST API.
//!
//! This module defines and implements a [`HubSpotSyncClient`] for pushing
//! contacts and reconciling contact property definitions. Every request is
//! authenticated with the `hapikey` query parameter and passes through the
//! shared [`RateLimitedRequester`], and responses are parsed back into
//! structured data or a [`HubSpotHttpError`].
//!
//! # Quick links to official docs
//! | Domain             | HubSpot reference                                                                     |
//! |--------------------|---------------------------------------------------------------------------------------|
//! | Contacts           | <https://legacydocs.hubspot.com/docs/methods/contacts/create_or_update>               |
//! | Contact properties | <https://legacydocs.hubspot.com/docs/methods/contacts/v1-contact-properties-overview> |

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use hubsync_network::{
    http::{HttpMethod, HttpResponse, HttpTransport, ReqwestTransport},
    ratelimiter::{CallRecordStore, InMemoryCallRecordStore, RateLimitedRequester, RateWindow},
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    common::{
        consts::{CONTACTS_PATH, HUBSYNC_USER_AGENT, PROPERTIES_PATH},
        credential::ApiKey,
    },
    config::HubSpotSyncConfig,
    http::{
        error::HubSpotHttpError,
        models::{ContactPushResponse, RemoteGroup, RemoteProperty, SyncPayload},
        parse::{decode_response, expect_status, expect_success, serialize_without_name},
    },
    properties::{manager::UserPropertyManager, record::UserRecord},
};

/// Provides an HTTP client for the [HubSpot](https://www.hubspot.com) v1 REST API.
///
/// The client owns the property registry and a rate-limited requester, so a
/// single instance covers contact pushes and property reconciliation while
/// drawing both from the same call quota.
#[derive(Clone, Debug)]
pub struct HubSpotSyncClient {
    base_url: String,
    requester: RateLimitedRequester,
    credential: ApiKey,
    manager: UserPropertyManager,
}

impl HubSpotSyncClient {
    /// Creates a new [`HubSpotSyncClient`] with the production transport and
    /// an in-process call record store.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured (directly or via the
    /// `HUBSPOT_API_KEY` environment variable) or if the HTTP transport
    /// cannot be constructed.
    pub fn new(config: &HubSpotSyncConfig, manager: UserPropertyManager) -> anyhow::Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(
            Self::default_headers(),
            config.timeout_secs,
        )?);
        let store = Arc::new(InMemoryCallRecordStore::new());
        Self::with_transport(config, manager, transport, store)
    }

    /// Creates a new [`HubSpotSyncClient`] over the given transport and call
    /// record store.
    ///
    /// Injecting the store shares the call quota with other requesters using
    /// the same key, or extends it across processes when the store is backed
    /// by an external service.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured (directly or via the
    /// `HUBSPOT_API_KEY` environment variable).
    pub fn with_transport(
        config: &HubSpotSyncConfig,
        manager: UserPropertyManager,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CallRecordStore>,
    ) -> anyhow::Result<Self> {
        let window = RateWindow::new(config.max_calls, config.window_secs);
        let requester = RateLimitedRequester::new(
            transport,
            store,
            window,
            Some(config.call_record_key.clone()),
        );

        Ok(Self {
            base_url: config.http_url(),
            requester,
            credential: ApiKey::new(config.api_key()?),
            manager,
        })
    }

    /// Creates a new [`HubSpotSyncClient`] configured entirely from
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the `HUBSPOT_API_KEY` environment variable is not
    /// set or if the HTTP transport cannot be constructed.
    pub fn from_env(manager: UserPropertyManager) -> anyhow::Result<Self> {
        Self::new(&HubSpotSyncConfig::default(), manager)
    }

    fn default_headers() -> HashMap<String, String> {
        HashMap::from([("user-agent".to_string(), HUBSYNC_USER_AGENT.to_string())])
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the property registry owned by this client.
    #[must_use]
    pub fn manager(&self) -> &UserPropertyManager {
        &self.manager
    }

    async fn send_raw(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, HubSpotHttpError> {
        let url = format!("{}{}", self.base_url, path);
        let params = vec![self.credential.as_query_param()];
        let headers = body.is_some().then(|| {
            HashMap::from([("content-type".to_string(), "application/json".to_string())])
        });

        tracing::debug!("Sending {method} request to {url}");

        self.requester
            .execute(method, &url, headers, Some(params), body)
            .await
            .map_err(Into::into)
    }

    async fn send_request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, HubSpotHttpError> {
        let response = self.send_raw(method, path, body).await?;
        decode_response(&response)
    }

    /// Creates or updates the contact identified by `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is empty, if the request fails, or if
    /// HubSpot rejects the payload.
    pub async fn create_or_update_contact(
        &self,
        email: &str,
        payload: &SyncPayload,
    ) -> Result<ContactPushResponse, HubSpotHttpError> {
        if email.is_empty() {
            return Err(HubSpotHttpError::ValidationError(
                "Contact email must not be empty".to_string(),
            ));
        }

        let path = format!("{CONTACTS_PATH}/createOrUpdate/email/{email}");
        let body = serde_json::to_vec(payload)?;
        self.send_request(HttpMethod::Post, &path, Some(body)).await
    }

    /// Updates the profile of the contact identified by `vid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if HubSpot answers with
    /// anything other than `204 No Content`.
    pub async fn update_contact(
        &self,
        vid: i64,
        payload: &SyncPayload,
    ) -> Result<(), HubSpotHttpError> {
        let path = format!("{CONTACTS_PATH}/vid/{vid}/profile");
        let body = serde_json::to_vec(payload)?;
        let response = self.send_raw(HttpMethod::Post, &path, Some(body)).await?;
        expect_status(&response, StatusCode::NO_CONTENT)
    }

    /// Builds the full payload for `user` and pushes it as a contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the user email is empty, if the request fails, or
    /// if HubSpot rejects the payload.
    pub async fn sync_user(
        &self,
        user: &dyn UserRecord,
    ) -> Result<ContactPushResponse, HubSpotHttpError> {
        let payload = self.manager.build_payload(user);
        self.create_or_update_contact(user.email(), &payload).await
    }

    /// Returns the contact property groups currently defined in HubSpot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_property_groups(&self) -> Result<Vec<RemoteGroup>, HubSpotHttpError> {
        let path = format!("{PROPERTIES_PATH}/groups");
        self.send_request(HttpMethod::Get, &path, None).await
    }

    /// Creates or updates every property group owned by the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if any request fails.
    pub async fn sync_property_groups(&self) -> Result<(), HubSpotHttpError> {
        let remote = self.list_property_groups().await?;

        for group in self.manager.groups() {
            if remote.iter().any(|r| r.name == group.name) {
                tracing::info!("Updating property group '{}'", group.name);
                let path = format!("{PROPERTIES_PATH}/groups/named/{}", group.name);
                let body = serialize_without_name(&group)?;
                let response = self.send_raw(HttpMethod::Put, &path, Some(body)).await?;
                expect_success(&response)?;
            } else {
                tracing::info!("Creating property group '{}'", group.name);
                let path = format!("{PROPERTIES_PATH}/groups");
                let body = serde_json::to_vec(&group)?;
                let response = self.send_raw(HttpMethod::Post, &path, Some(body)).await?;
                expect_success(&response)?;
            }
        }

        Ok(())
    }

    /// Returns the contact properties currently defined in HubSpot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_properties(&self) -> Result<Vec<RemoteProperty>, HubSpotHttpError> {
        let path = format!("{PROPERTIES_PATH}/properties");
        self.send_request(HttpMethod::Get, &path, None).await
    }

    /// Reconciles the remote property definitions with the registry.
    ///
    /// Custom properties are created or updated to match their local
    /// definitions; remote properties in a managed group with no local
    /// counterpart are deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if any request fails.
    pub async fn sync_properties(&self) -> Result<(), HubSpotHttpError> {
        let remote = self.list_properties().await?;

        for prop in self.manager.custom_properties() {
            let def = prop.describe();
            if remote.iter().any(|r| r.name == def.name) {
                tracing::info!("Updating property '{}'", def.name);
                let path = format!("{PROPERTIES_PATH}/properties/named/{}", def.name);
                let body = serialize_without_name(&def)?;
                let response = self.send_raw(HttpMethod::Put, &path, Some(body)).await?;
                expect_success(&response)?;
            } else {
                tracing::info!("Creating property '{}'", def.name);
                let path = format!("{PROPERTIES_PATH}/properties");
                let body = serde_json::to_vec(&def)?;
                let response = self.send_raw(HttpMethod::Post, &path, Some(body)).await?;
                expect_success(&response)?;
            }
        }

        self.delete_orphaned_properties(&remote).await
    }

    /// Deletes remote properties in managed groups with no local counterpart.
    async fn delete_orphaned_properties(
        &self,
        remote: &[RemoteProperty],
    ) -> Result<(), HubSpotHttpError> {
        let groups = self.manager.groups();
        let local: HashSet<&str> = self.manager.custom_properties().map(|p| p.name()).collect();

        for prop in remote {
            let in_managed_group = groups.iter().any(|g| g.name == prop.group_name);
            if in_managed_group && !local.contains(prop.name.as_str()) {
                tracing::warn!("Deleting orphaned property '{}'", prop.name);
                let path = format!("{PROPERTIES_PATH}/properties/named/{}", prop.name);
                let response = self.send_raw(HttpMethod::Delete, &path, None).await?;
                expect_status(&response, StatusCode::NO_CONTENT)?;
            }
        }

        Ok(())
    }
}
