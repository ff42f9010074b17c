//! Route paths shared by the gateway and the backend.
//!
//! The gateway exposes each route under the same path it forwards to, so one
//! table serves both sides.

use crate::types::DbId;

pub const USER_REGISTER: &str = "/api/user/register";
pub const USER_LOGIN: &str = "/api/user/login";
pub const USER_LOGOUT: &str = "/api/user/logout";
pub const USER_VERIFY: &str = "/api/user/verify";
pub const USER_FORGOT_PASSWORD: &str = "/api/user/forgot-password";
pub const USER_RESEND_OTP: &str = "/api/user/resend-otp";
pub const USER_RESET_PASSWORD: &str = "/api/user/reset-password";
pub const USER_ME: &str = "/api/user/auth/me";

pub const ROOMS: &str = "/api/rooms";
pub const ASSETS: &str = "/api/assets";
pub const ASSET_CATEGORIES: &str = "/api/asset-categories";

pub fn room_by_id(id: DbId) -> String {
    format!("{ROOMS}/{id}")
}

pub fn asset_by_id(id: DbId) -> String {
    format!("{ASSETS}/{id}")
}

pub fn assets_by_room(room_id: DbId) -> String {
    format!("{ASSETS}/room/{room_id}")
}
