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

//! Provides a sliding-window rate gate over an injected store of call records.
//!
//! The gate keeps a sequence of recent call timestamps (Unix epoch seconds)
//! under a key in a [`CallRecordStore`]. Before each request it prunes the
//! timestamps that have aged out of the window and, when the surviving count
//! has reached the quota, sleeps until the oldest surviving call ages out
//! (plus a small safety margin) before recording the call and sending it.
//!
//! The limiter is deliberately best-effort: records are read, pruned, and
//! written back around each call without holding any lock across the sleep or
//! the request itself, so concurrent callers may briefly overshoot the quota.
//! Sharing one store key between requesters shares the quota between them.

use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::Utc;

use crate::http::{HttpClientError, HttpMethod, HttpResponse, HttpTransport};

/// The default number of calls permitted inside the window.
pub const DEFAULT_MAX_CALLS: u32 = 8;
/// The default window length in seconds.
pub const DEFAULT_WINDOW_SECS: f64 = 10.0;
/// The default safety margin in seconds added when computing a throttle delay.
pub const DEFAULT_SAFETY_MARGIN_SECS: f64 = 0.1;
/// The default store key under which call records are kept.
pub const DEFAULT_CALL_RECORD_KEY: &str = "hub_api_calls";

/// Returns the current wall-clock time as Unix epoch seconds.
fn unix_secs_now() -> f64 {
    Utc::now().timestamp_micros() as f64 * 1e-6
}

/// A sliding-window quota over recent call timestamps.
///
/// The window is described by the maximum number of calls permitted inside it
/// and its length in seconds. Both the pruning rule and the throttle delay
/// are pure functions of a record sequence and a current time, which keeps
/// them directly testable without any clock or store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateWindow {
    /// The maximum number of calls permitted inside the window.
    pub max_calls: u32,
    /// The window length in seconds.
    pub window_secs: f64,
    /// The safety margin in seconds added on top of the remaining age of the
    /// oldest record when computing a throttle delay.
    pub safety_margin_secs: f64,
}

impl Default for RateWindow {
    fn default() -> Self {
        Self {
            max_calls: DEFAULT_MAX_CALLS,
            window_secs: DEFAULT_WINDOW_SECS,
            safety_margin_secs: DEFAULT_SAFETY_MARGIN_SECS,
        }
    }
}

impl RateWindow {
    /// Creates a new [`RateWindow`] with the default safety margin.
    #[must_use]
    pub const fn new(max_calls: u32, window_secs: f64) -> Self {
        Self {
            max_calls,
            window_secs,
            safety_margin_secs: DEFAULT_SAFETY_MARGIN_SECS,
        }
    }

    /// Drops every record which has aged out of the window relative to `now`.
    ///
    /// The boundary is inclusive: a record exactly `window_secs` old is
    /// retained.
    pub fn prune(&self, records: &mut Vec<f64>, now: f64) {
        records.retain(|ts| now - ts <= self.window_secs);
    }

    /// Returns the delay to wait before the next call, or `None` when the
    /// window still has capacity.
    ///
    /// The delay is derived from the oldest surviving record: once that
    /// record has aged past the window (plus the safety margin) a slot is
    /// free again. The result is clamped to be non-negative and never
    /// exceeds the window length, so a single sleep suffices.
    #[must_use]
    pub fn throttle_delay(&self, records: &[f64], now: f64) -> Option<Duration> {
        if (records.len() as u32) < self.max_calls {
            return None;
        }
        let oldest = records.first().copied().unwrap_or(now);
        let delay_secs = (self.window_secs + self.safety_margin_secs - (now - oldest))
            .clamp(0.0, self.window_secs);
        Some(Duration::from_secs_f64(delay_secs))
    }
}

/// A store of recent call timestamps, keyed by requester.
///
/// Timestamps are Unix epoch seconds. The store is the synchronization point
/// of the gate: requesters sharing a store key share a quota, and an external
/// store (a cache service, say) extends the quota across processes. An
/// absent key is equivalent to an empty record sequence.
#[async_trait::async_trait]
pub trait CallRecordStore: Send + Sync + Debug {
    /// Returns the call records for `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    async fn get_records(&self, key: &str) -> anyhow::Result<Option<Vec<f64>>>;

    /// Replaces the call records for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    async fn put_records(&self, key: &str, records: Vec<f64>) -> anyhow::Result<()>;
}

/// An in-process [`CallRecordStore`] backed by a mutex-guarded map.
///
/// Suitable for single-process deployments and tests. The lock is held only
/// for the duration of a read or a write, never across an await point.
#[derive(Debug, Default)]
pub struct InMemoryCallRecordStore {
    records: Mutex<HashMap<String, Vec<f64>>>,
}

impl InMemoryCallRecordStore {
    /// Creates a new empty [`InMemoryCallRecordStore`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CallRecordStore for InMemoryCallRecordStore {
    async fn get_records(&self, key: &str) -> anyhow::Result<Option<Vec<f64>>> {
        let guard = self
            .records
            .lock()
            .map_err(|e| anyhow::anyhow!("call record lock poisoned: {e}"))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_records(&self, key: &str, records: Vec<f64>) -> anyhow::Result<()> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| anyhow::anyhow!("call record lock poisoned: {e}"))?;
        guard.insert(key.to_string(), records);
        Ok(())
    }
}

/// A requester which throttles calls through a sliding window quota before
/// handing them to the transport.
///
/// Each call performs one read-prune-write round trip against the store:
/// stale records are dropped, the call is stamped (after any throttle sleep)
/// and appended, and the sequence is written back before the request goes
/// out. The stamp is kept even when the transport fails, so failed calls
/// count against the quota. The requester performs no retries and does not
/// translate transport errors.
#[derive(Clone, Debug)]
pub struct RateLimitedRequester {
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn CallRecordStore>,
    window: RateWindow,
    record_key: String,
}

impl RateLimitedRequester {
    /// Creates a new [`RateLimitedRequester`].
    ///
    /// When `record_key` is `None` the default key
    /// [`DEFAULT_CALL_RECORD_KEY`] is used.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CallRecordStore>,
        window: RateWindow,
        record_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            store,
            window,
            record_key: record_key.unwrap_or_else(|| DEFAULT_CALL_RECORD_KEY.to_string()),
        }
    }

    /// Returns the configured rate window.
    #[must_use]
    pub const fn window(&self) -> &RateWindow {
        &self.window
    }

    /// Returns the store key under which call records are kept.
    #[must_use]
    pub fn record_key(&self) -> &str {
        &self.record_key
    }

    /// Sends a request through the rate gate.
    ///
    /// # Errors
    ///
    /// Returns an error if the call-record store fails (before any traffic is
    /// sent) or if the transport fails. Transport errors are propagated
    /// unchanged.
    pub async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Option<HashMap<String, String>>,
        params: Option<Vec<(String, String)>>,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, HttpClientError> {
        self.acquire_slot().await?;
        self.transport.send(method, url, headers, params, body).await
    }

    /// Waits for window capacity and records the call.
    async fn acquire_slot(&self) -> Result<(), HttpClientError> {
        let mut records = self
            .store
            .get_records(&self.record_key)
            .await
            .map_err(|e| HttpClientError::RecordStoreError(e.to_string()))?
            .unwrap_or_default();

        let now = unix_secs_now();
        self.window.prune(&mut records, now);

        if let Some(delay) = self.window.throttle_delay(&records, now) {
            tracing::info!(
                "Rate window full with {} recent calls, sleeping for {:.3}s",
                records.len(),
                delay.as_secs_f64(),
            );
            tokio::time::sleep(delay).await;
        }

        // Stamp taken after any sleep so stored records reflect send time
        records.push(unix_secs_now());
        self.store
            .put_records(&self.record_key, records)
            .await
            .map_err(|e| HttpClientError::RecordStoreError(e.to_string()))?;

        Ok(())
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
    fn test_default_window() {
        let window = RateWindow::default();
        assert_eq!(window.max_calls, 8);
        assert_eq!(window.window_secs, 10.0);
        assert_eq!(window.safety_margin_secs, 0.1);
    }

    #[rstest]
    fn test_prune_retains_boundary_record() {
        let window = RateWindow::new(8, 10.0);
        let now = 1_000.0;
        // One record exactly on the boundary, one just past it
        let mut records = vec![now - 10.0, now - 10.001, now - 5.0];
        window.prune(&mut records, now);
        assert_eq!(records, vec![now - 10.0, now - 5.0]);
    }

    #[rstest]
    fn test_prune_empty_records() {
        let window = RateWindow::new(8, 10.0);
        let mut records = Vec::new();
        window.prune(&mut records, 1_000.0);
        assert!(records.is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(7)]
    fn test_no_delay_under_quota(#[case] count: usize) {
        let window = RateWindow::new(8, 10.0);
        let now = 1_000.0;
        let records: Vec<f64> = (0..count).map(|i| now - i as f64).collect();
        assert!(window.throttle_delay(&records, now).is_none());
    }

    #[rstest]
    fn test_delay_capped_at_window_for_fresh_records() {
        let window = RateWindow::new(8, 10.0);
        let now = 1_000.0;
        // All eight records just issued: raw delay would be 10.1s
        let records = vec![now; 8];
        let delay = window.throttle_delay(&records, now).unwrap();
        assert_eq!(delay, Duration::from_secs_f64(10.0));
    }

    #[rstest]
    fn test_delay_derived_from_oldest_record() {
        let window = RateWindow::new(8, 10.0);
        let now = 1_000.0;
        let mut records = vec![now - 4.0; 8];
        records[0] = now - 6.0;
        let delay = window.throttle_delay(&records, now).unwrap();
        // 10.0 + 0.1 - 6.0
        assert!((delay.as_secs_f64() - 4.1).abs() < 1e-9);
    }

    #[rstest]
    fn test_delay_includes_safety_margin() {
        let window = RateWindow::new(8, 10.0);
        let now = 1_000.0;
        // Oldest record on the pruning boundary: only the margin remains
        let mut records = vec![now - 1.0; 8];
        records[0] = now - 10.0;
        let delay = window.throttle_delay(&records, now).unwrap();
        assert!((delay.as_secs_f64() - 0.1).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_in_memory_store_roundtrip() {
        let store = InMemoryCallRecordStore::new();
        assert_eq!(store.get_records("quota").await.unwrap(), None);

        store.put_records("quota", vec![1.0, 2.0]).await.unwrap();
        assert_eq!(
            store.get_records("quota").await.unwrap(),
            Some(vec![1.0, 2.0])
        );

        store.put_records("quota", vec![3.0]).await.unwrap();
        assert_eq!(store.get_records("quota").await.unwrap(), Some(vec![3.0]));
    }

    #[tokio::test]
    async fn test_in_memory_store_keys_are_independent() {
        let store = InMemoryCallRecordStore::new();
        store.put_records("a", vec![1.0]).await.unwrap();
        store.put_records("b", vec![2.0]).await.unwrap();
        assert_eq!(store.get_records("a").await.unwrap(), Some(vec![1.0]));
        assert_eq!(store.get_records("b").await.unwrap(), Some(vec![2.0]));
    }
}
