//! Form models and their validation rules.
//!
//! Every form is validated with [`validator`] before any network call; the
//! per-field failures are collected into [`FieldErrors`] keyed by the
//! camelCase field name used on the wire. The room and asset forms double as
//! the JSON payloads sent to the backend.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::capacity::FootprintDimensions;
use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const PASSWORD_MIN_LENGTH: u64 = 8;
pub const USERNAME_MIN_LENGTH: u64 = 10;
pub const USERNAME_MAX_LENGTH: u64 = 50;
pub const OTP_LENGTH: u64 = 6;
pub const NAME_MAX_LENGTH: u64 = 100;
/// Room dimensions, in metres.
pub const ROOM_DIMENSION_MIN_M: f64 = 0.1;
pub const ROOM_DIMENSION_MAX_M: f64 = 100.0;
/// Asset dimensions, in centimetres.
pub const ASSET_DIMENSION_MIN_CM: f64 = 1.0;
pub const ASSET_DIMENSION_MAX_CM: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Validation failures grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure message against `field`.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All messages for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First message for `field`, the one a form shows next to the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }

    /// Iterate field names with failures.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, msgs)| format!("{field}: {}", msgs.join(", ")))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let name = camel_case(&field);
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.insert(name.clone(), message);
            }
        }
        out
    }
}

/// `confirm_password` -> `confirmPassword`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Run a form's validation rules, mapping failures to [`CoreError::Validation`].
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::Validation(errors.into()))
}

// ---------------------------------------------------------------------------
// Account forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = PASSWORD_MIN_LENGTH, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords don't match"))]
    pub confirm_password: String,
    #[serde(default)]
    #[validate(length(
        min = USERNAME_MIN_LENGTH,
        max = USERNAME_MAX_LENGTH,
        message = "Username must be between 10 and 50 characters"
    ))]
    pub username: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// One-time-password verification after registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyForm {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(equal = OTP_LENGTH, message = "OTP code must be 6 digits"))]
    pub otp: String,
}

/// Forgot-password and resend-OTP requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailForm {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordForm {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(equal = OTP_LENGTH, message = "OTP code must be 6 digits"))]
    pub otp_code: String,
    #[serde(default)]
    #[validate(length(min = PASSWORD_MIN_LENGTH, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords don't match"))]
    pub password_confirm: String,
}

// ---------------------------------------------------------------------------
// Room form
// ---------------------------------------------------------------------------

/// Create / update payload for a room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomForm {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH, message = "Room name is required (max 100 characters)"))]
    pub name: String,
    #[validate(range(
        min = ROOM_DIMENSION_MIN_M,
        max = ROOM_DIMENSION_MAX_M,
        message = "Length must be between 0.1 and 100 meters"
    ))]
    pub length_m: f64,
    #[validate(range(
        min = ROOM_DIMENSION_MIN_M,
        max = ROOM_DIMENSION_MAX_M,
        message = "Width must be between 0.1 and 100 meters"
    ))]
    pub width_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Door width cannot be negative"))]
    pub door_width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Window width cannot be negative"))]
    pub window_width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub power_outlet_positions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Asset form
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// Create / update payload for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssetForm {
    #[validate(range(min = 1, message = "Room is required"))]
    pub room_id: DbId,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH, message = "Asset name is required (max 100 characters)"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[validate(range(
        min = ASSET_DIMENSION_MIN_CM,
        max = ASSET_DIMENSION_MAX_CM,
        message = "Length must be between 1 and 10000 cm"
    ))]
    pub length_cm: f64,
    #[validate(range(
        min = ASSET_DIMENSION_MIN_CM,
        max = ASSET_DIMENSION_MAX_CM,
        message = "Width must be between 1 and 10000 cm"
    ))]
    pub width_cm: f64,
    #[validate(range(
        min = ASSET_DIMENSION_MIN_CM,
        max = ASSET_DIMENSION_MAX_CM,
        message = "Height must be between 1 and 10000 cm"
    ))]
    pub height_cm: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Clearance cannot be negative"))]
    pub clearance_front_cm: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Clearance cannot be negative"))]
    pub clearance_sides_cm: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Clearance cannot be negative"))]
    pub clearance_back_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_zone: Option<String>,
    #[serde(default)]
    pub must_be_near_wall: bool,
    #[serde(default)]
    pub must_be_near_window: bool,
    #[serde(default)]
    pub must_be_near_outlet: bool,
    #[serde(default = "default_true")]
    pub can_rotate: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cannot_adjacent_to: Vec<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Purchase price cannot be negative"))]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssetForm {
    /// A blank form for `room_id` with no clearances, rotatable by default.
    pub fn for_room(room_id: DbId, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
            category: None,
            photo_url: None,
            length_cm: 0.0,
            width_cm: 0.0,
            height_cm: 0.0,
            clearance_front_cm: 0.0,
            clearance_sides_cm: 0.0,
            clearance_back_cm: 0.0,
            function_zone: None,
            must_be_near_wall: false,
            must_be_near_window: false,
            must_be_near_outlet: false,
            can_rotate: true,
            cannot_adjacent_to: Vec::new(),
            purchase_date: None,
            purchase_price: None,
            condition: None,
            notes: None,
        }
    }

    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = length_cm;
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self
    }

    pub fn with_clearances(mut self, front_cm: f64, sides_cm: f64, back_cm: f64) -> Self {
        self.clearance_front_cm = front_cm;
        self.clearance_sides_cm = sides_cm;
        self.clearance_back_cm = back_cm;
        self
    }
}

impl FootprintDimensions for AssetForm {
    fn length_cm(&self) -> f64 {
        self.length_cm
    }
    fn width_cm(&self) -> f64 {
        self.width_cm
    }
    fn clearance_front_cm(&self) -> f64 {
        self.clearance_front_cm
    }
    fn clearance_sides_cm(&self) -> f64 {
        self.clearance_sides_cm
    }
    fn clearance_back_cm(&self) -> f64 {
        self.clearance_back_cm
    }
}
