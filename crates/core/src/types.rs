//! Room, asset and user models as exchanged with the backend.
//!
//! All JSON field names are camelCase. Optional fields default when the
//! backend omits them so partially populated records still deserialize.

use serde::{Deserialize, Serialize};

use crate::capacity::{self, FootprintDimensions};

/// Backend primary keys are 64-bit integers.
pub type DbId = i64;

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A room owned by the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    pub name: String,
    pub length_m: f64,
    pub width_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub power_outlet_positions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Room {
    /// Floor area in square metres.
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Floor area in square centimetres.
    pub fn area_cm2(&self) -> f64 {
        capacity::room_area_cm2(self.length_m, self.width_m)
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// A physical item placed in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub room_id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub length_cm: f64,
    pub width_cm: f64,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default)]
    pub clearance_front_cm: f64,
    #[serde(default)]
    pub clearance_sides_cm: f64,
    #[serde(default)]
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
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FootprintDimensions for Asset {
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

/// An asset category offered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCategory {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Profile blob cached next to the session token for display purposes.
///
/// The backend owns the shape; known fields are typed and anything else is
/// preserved in `extra` so a round trip through storage loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
