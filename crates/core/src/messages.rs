//! User-facing message strings shared by the client and the gateway.
//!
//! Keeping them in one place keeps the `{ "message": ... }` bodies produced
//! by the gateway identical to what the client falls back to.

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

pub const NO_TOKEN: &str = "Unauthorized - No token provided";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_SUCCEEDED: &str = "Login successful";
pub const LOGGED_OUT: &str = "Logged out successfully";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful";
pub const VERIFICATION_FAILED: &str = "Verification failed";
pub const FORGOT_PASSWORD_FAILED: &str = "Failed to send password reset email";
pub const FORGOT_PASSWORD_SENT: &str = "Password reset link has been sent to your email";
pub const RESEND_OTP_FAILED: &str = "Failed to resend OTP";
pub const RESEND_OTP_SENT: &str = "OTP sent successfully";
pub const RESET_PASSWORD_FAILED: &str = "Failed to reset password";
pub const RESET_PASSWORD_SUCCEEDED: &str = "Password has been reset successfully";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user data";

pub const EMAIL_AND_PASSWORD_REQUIRED: &str = "Email and password are required";
pub const EMAIL_AND_OTP_REQUIRED: &str = "Email and OTP are required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

// ---------------------------------------------------------------------------
// Transport / configuration
// ---------------------------------------------------------------------------

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const CONFIG_ERROR: &str = "Server configuration error: API URL not defined";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_QUERY: &str = "Invalid query parameters";
pub const INVALID_ID: &str = "Invalid resource id";
pub const ROUTE_NOT_FOUND: &str = "Not found";

/// Fallback used by the HTTP client when an error body carries neither a
/// `message` nor an `error` field.
pub const GENERIC_CLIENT_ERROR: &str = "An error occurred";

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

pub const FETCH_ROOMS_FAILED: &str = "Failed to fetch rooms";
pub const CREATE_ROOM_FAILED: &str = "Failed to create room";
pub const FETCH_ROOM_FAILED: &str = "Failed to fetch room";
pub const UPDATE_ROOM_FAILED: &str = "Failed to update room";
pub const DELETE_ROOM_FAILED: &str = "Failed to delete room";

pub const FETCH_ASSETS_FAILED: &str = "Failed to fetch assets";
pub const CREATE_ASSET_FAILED: &str = "Failed to create asset";
pub const FETCH_ASSET_FAILED: &str = "Failed to fetch asset";
pub const UPDATE_ASSET_FAILED: &str = "Failed to update asset";
pub const DELETE_ASSET_FAILED: &str = "Failed to delete asset";
pub const FETCH_ROOM_ASSETS_FAILED: &str = "Failed to fetch assets by room";
pub const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch asset categories";
