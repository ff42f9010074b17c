//! Client-side session: an opaque bearer token, its expiration instant and a
//! cached user profile, all kept in persisted key-value storage.
//!
//! The token and its expiration are written and cleared together. A session
//! missing either one is invalid. Every authentication check self-heals: a
//! present-but-expired token is wiped on the spot.

pub mod clock;
pub mod storage;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::error::ClientResult;
use clock::{Clock, SystemClock};
use storage::{SessionStorage, StorageEvent, UnavailableStorage};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the expiration as epoch milliseconds.
pub const EXPIRATION_KEY: &str = "authTokenExpiration";
/// Storage key holding the JSON user profile.
pub const USER_KEY: &str = "user";

/// Window granted by [`SessionStore::refresh`], in minutes.
pub const RENEWAL_MINUTES: i64 = 10;

/// Something that can tell the backend a session is ending.
#[async_trait]
pub trait LogoutNotifier: Send + Sync {
    async fn notify_logout(&self, token: Option<&str>) -> ClientResult<()>;
}

/// Handle over the persisted session. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    /// Session over `storage`, using wall-clock time.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: Arc<dyn SessionStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Session for a context without persistent storage. Every read misses
    /// and every write is dropped.
    pub fn unavailable() -> Self {
        Self::new(Arc::new(UnavailableStorage))
    }

    // ---- token ----

    /// Store `token` valid for `ttl_minutes` from now.
    pub fn set_token(&self, token: &str, ttl_minutes: i64) {
        let expires_at = self.expiry_after(ttl_minutes);
        let expires_ms = expires_at.timestamp_millis().to_string();
        self.storage
            .set_many(&[(TOKEN_KEY, token), (EXPIRATION_KEY, &expires_ms)]);
    }

    /// `minutes` from now, saturating at the representable range.
    fn expiry_after(&self, minutes: i64) -> DateTime<Utc> {
        TimeDelta::try_minutes(minutes)
            .and_then(|ttl| self.clock.now().checked_add_signed(ttl))
            .unwrap_or_else(|| {
                tracing::warn!(minutes, "Session lifetime out of range, saturating");
                if minutes < 0 {
                    DateTime::<Utc>::MIN_UTC
                } else {
                    DateTime::<Utc>::MAX_UTC
                }
            })
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Stored expiration instant, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.storage.get(EXPIRATION_KEY)?;
        match raw.parse::<i64>() {
            Ok(ms) => DateTime::from_timestamp_millis(ms),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "Unreadable session expiration");
                None
            }
        }
    }

    /// True when no expiration is stored or the clock is past it. The
    /// expiration instant itself is still valid.
    pub fn is_expired(&self) -> bool {
        match self.expires_at() {
            Some(expires_at) => self.clock.now() > expires_at,
            None => true,
        }
    }

    /// Push the expiration out to [`RENEWAL_MINUTES`] from now.
    ///
    /// Only a live session is extended; an absent or expired one is left
    /// untouched.
    pub fn refresh(&self) {
        if self.token().is_none() || self.is_expired() {
            return;
        }
        let expires_at = self.expiry_after(RENEWAL_MINUTES);
        self.storage
            .set(EXPIRATION_KEY, &expires_at.timestamp_millis().to_string());
    }

    /// Token present and not expired.
    ///
    /// A present-but-expired token clears the whole session before this
    /// returns `false`.
    pub fn is_authenticated(&self) -> bool {
        if self.token().is_none() {
            return false;
        }
        if self.is_expired() {
            tracing::debug!("Session expired, clearing stored state");
            self.clear();
            return false;
        }
        true
    }

    // ---- user ----

    pub fn set_user<T: Serialize + ?Sized>(&self, user: &T) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize user profile"),
        }
    }

    /// Cached user profile. Unparseable JSON reads as `None`.
    pub fn user<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.storage.get(USER_KEY)?;
        serde_json::from_str(&raw)
            .map_err(|e| tracing::warn!(error = %e, "Unreadable cached user profile"))
            .ok()
    }

    // ---- teardown ----

    /// Remove token, expiration and cached user together.
    pub fn clear(&self) {
        self.storage
            .remove_many(&[TOKEN_KEY, EXPIRATION_KEY, USER_KEY]);
    }

    /// End the session.
    ///
    /// The local session is cleared first, unconditionally. The backend is
    /// then notified in the background with the token captured beforehand;
    /// a failed notification is only logged. Await the returned handle to
    /// wait for it to settle. Outside a Tokio runtime nothing is sent and
    /// `None` is returned.
    pub fn logout(&self, notifier: Arc<dyn LogoutNotifier>) -> Option<JoinHandle<()>> {
        let token = self.token();
        self.clear();

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("No async runtime, skipping logout notification");
            return None;
        };
        Some(runtime.spawn(async move {
            if let Err(e) = notifier.notify_logout(token.as_deref()).await {
                tracing::warn!(error = %e, "Logout notification failed");
            }
        }))
    }

    /// Subscribe to storage changes made by any store sharing this storage.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<StorageEvent>> {
        self.storage.subscribe()
    }
}
