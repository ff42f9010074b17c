//! Typed calls for every gateway route.
//!
//! Form payloads are validated before anything leaves the process, and asset
//! creation is guarded by the room capacity check. Successful bodies are
//! unwrapped from the backend's `{ "data": ... }` envelope where present.

use std::sync::Arc;

use dormspace_core::capacity::check_capacity;
use dormspace_core::envelope::{Page, PageRequest, MAX_PAGE_SIZE};
use dormspace_core::error::CoreError;
use dormspace_core::paths;
use dormspace_core::report::{self, DashboardStats, InventoryReport, RoomUtilization};
use dormspace_core::types::{Asset, AssetCategory, DbId, Room, UserSummary};
use dormspace_core::validation::{
    validate_form, AssetForm, EmailForm, LoginForm, RegisterForm, ResetPasswordForm, RoomForm,
    VerifyForm,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::error::ClientResult;
use crate::http::ApiClient;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub expiration_minutes: Option<i64>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Verification answers with a token and, depending on the backend, either a
/// profile object or just the verified email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: UserSummary,
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

fn decode<T: DeserializeOwned>(body: Value) -> ClientResult<T> {
    Ok(serde_json::from_value(body)?)
}

/// `{ "data": T }` or a bare `T`.
fn unwrap_data<T: DeserializeOwned>(mut body: Value) -> ClientResult<T> {
    match body.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => decode(data),
        _ => decode(body),
    }
}

/// A bare array, or an object whose `data` is an array. Anything else is an
/// empty list.
fn into_list<T: DeserializeOwned>(mut body: Value) -> ClientResult<Vec<T>> {
    let list = match body {
        Value::Array(_) => body,
        Value::Object(_) => match body.get_mut("data").map(Value::take) {
            Some(data @ Value::Array(_)) => data,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    decode(list)
}

/// A paginated envelope, or a bare array wrapped as a single page.
fn into_page<T: DeserializeOwned>(body: Value) -> ClientResult<Page<T>> {
    match body {
        Value::Array(_) => Ok(Page {
            data: decode(body)?,
            ..Page::default()
        }),
        Value::Null => Ok(Page::default()),
        _ => decode(body),
    }
}

impl ApiClient {
    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    pub async fn register(&self, form: &RegisterForm) -> ClientResult<RegisterResponse> {
        validate_form(form)?;
        decode(self.post(paths::USER_REGISTER, form).await?)
    }

    /// Log in and persist the issued token (with the configured TTL) and the
    /// returned profile.
    pub async fn login(&self, form: &LoginForm) -> ClientResult<LoginResponse> {
        validate_form(form)?;
        let response: LoginResponse = decode(self.post(paths::USER_LOGIN, form).await?)?;

        if let Some(token) = response.token.as_deref() {
            self.session().set_token(token, self.token_ttl_minutes());
        }
        if let Some(user) = &response.user {
            self.session().set_user(user);
        }
        tracing::info!(email = %form.email, "Logged in");
        Ok(response)
    }

    /// Confirm the emailed OTP. A returned token starts a session with the
    /// configured TTL.
    pub async fn verify(&self, form: &VerifyForm) -> ClientResult<VerifyResponse> {
        validate_form(form)?;
        let response: VerifyResponse = decode(self.post(paths::USER_VERIFY, form).await?)?;

        if let Some(token) = response.token.as_deref() {
            self.session().set_token(token, self.token_ttl_minutes());
        }
        Ok(response)
    }

    pub async fn forgot_password(&self, form: &EmailForm) -> ClientResult<MessageResponse> {
        validate_form(form)?;
        decode(self.post(paths::USER_FORGOT_PASSWORD, form).await?)
    }

    pub async fn resend_otp(&self, form: &EmailForm) -> ClientResult<MessageResponse> {
        validate_form(form)?;
        decode(self.post(paths::USER_RESEND_OTP, form).await?)
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> ClientResult<MessageResponse> {
        validate_form(form)?;
        decode(self.post(paths::USER_RESET_PASSWORD, form).await?)
    }

    /// Fetch the signed-in profile and refresh the cached copy.
    pub async fn current_user(&self) -> ClientResult<UserSummary> {
        let response: MeResponse = decode(self.get(paths::USER_ME).await?)?;
        self.session().set_user(&response.user);
        Ok(response.user)
    }

    /// Clear the session locally and tell the gateway it is over.
    ///
    /// Local state is gone by the time this returns; the handle, present
    /// when called inside a Tokio runtime, resolves once the notification
    /// has settled.
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        self.session().logout(Arc::new(self.clone()))
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    pub async fn rooms(&self, page: PageRequest) -> ClientResult<Page<Room>> {
        let path = format!("{}?{}", paths::ROOMS, page.to_query());
        into_page(self.get(&path).await?)
    }

    /// First page of rooms at the configured default page size.
    pub async fn rooms_default(&self) -> ClientResult<Page<Room>> {
        self.rooms(PageRequest::new(1, self.default_page_size())).await
    }

    pub async fn room(&self, id: DbId) -> ClientResult<Room> {
        unwrap_data(self.get(&paths::room_by_id(id)).await?)
    }

    pub async fn create_room(&self, form: &RoomForm) -> ClientResult<Room> {
        validate_form(form)?;
        unwrap_data(self.post(paths::ROOMS, form).await?)
    }

    pub async fn update_room(&self, id: DbId, form: &RoomForm) -> ClientResult<Room> {
        validate_form(form)?;
        unwrap_data(self.put(&paths::room_by_id(id), form).await?)
    }

    pub async fn delete_room(&self, id: DbId) -> ClientResult<()> {
        self.delete(&paths::room_by_id(id)).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    pub async fn assets(&self, page: PageRequest) -> ClientResult<Page<Asset>> {
        let path = format!("{}?{}", paths::ASSETS, page.to_query());
        into_page(self.get(&path).await?)
    }

    pub async fn asset(&self, id: DbId) -> ClientResult<Asset> {
        unwrap_data(self.get(&paths::asset_by_id(id)).await?)
    }

    pub async fn assets_by_room(&self, room_id: DbId) -> ClientResult<Vec<Asset>> {
        into_list(self.get(&paths::assets_by_room(room_id)).await?)
    }

    /// Create an asset in `room`, which already holds `existing`.
    ///
    /// Validation and the capacity check both run before any request; a
    /// rejected placement never reaches the network.
    pub async fn create_asset_in(
        &self,
        room: &Room,
        existing: &[Asset],
        form: &AssetForm,
    ) -> ClientResult<Asset> {
        validate_form(form)?;
        check_capacity(room.length_m, room.width_m, existing, form)
            .ensure_fits()
            .map_err(CoreError::from)?;
        unwrap_data(self.post(paths::ASSETS, form).await?)
    }

    /// Fetch what `room` already holds, then create the asset if it fits.
    pub async fn create_asset(&self, room: &Room, form: &AssetForm) -> ClientResult<Asset> {
        validate_form(form)?;
        let existing = self.assets_by_room(room.id).await?;
        self.create_asset_in(room, &existing, form).await
    }

    pub async fn update_asset(&self, id: DbId, form: &AssetForm) -> ClientResult<Asset> {
        validate_form(form)?;
        unwrap_data(self.put(&paths::asset_by_id(id), form).await?)
    }

    pub async fn delete_asset(&self, id: DbId) -> ClientResult<()> {
        self.delete(&paths::asset_by_id(id)).await?;
        Ok(())
    }

    pub async fn asset_categories(&self) -> ClientResult<Vec<AssetCategory>> {
        into_list(self.get(paths::ASSET_CATEGORIES).await?)
    }

    // -----------------------------------------------------------------------
    // Reports
    // -----------------------------------------------------------------------

    pub async fn dashboard_stats(&self) -> DashboardStats {
        let (rooms, assets) = self.everything().await;
        report::dashboard_stats(&rooms, &assets)
    }

    pub async fn inventory_report(&self) -> InventoryReport {
        let (rooms, assets) = self.everything().await;
        report::inventory_report(&rooms, &assets)
    }

    /// Floor usage for `room`. An unreachable asset list reads as empty.
    pub async fn room_utilization(&self, room: &Room) -> RoomUtilization {
        let assets = self.assets_by_room(room.id).await.unwrap_or_else(|e| {
            tracing::warn!(room_id = room.id, error = %e, "Failed to fetch room assets for report");
            Vec::new()
        });
        report::room_utilization(room, &assets)
    }

    /// Largest page of rooms and assets; each list degrades to empty on error.
    async fn everything(&self) -> (Vec<Room>, Vec<Asset>) {
        let all = PageRequest::new(1, MAX_PAGE_SIZE);
        let (rooms, assets) = tokio::join!(self.rooms(all), self.assets(all));

        let rooms = rooms.map(|p| p.data).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to fetch rooms for report");
            Vec::new()
        });
        let assets = assets.map(|p| p.data).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to fetch assets for report");
            Vec::new()
        });
        (rooms, assets)
    }
}
