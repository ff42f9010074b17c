//! Reporting aggregates over rooms and assets.
//!
//! Pure functions over already-fetched lists; nothing here talks to the
//! backend.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::capacity::{self, FootprintDimensions};
use crate::types::{Asset, Room};

/// Category label for assets without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

// ---------------------------------------------------------------------------
// Per-room utilization
// ---------------------------------------------------------------------------

/// Floor usage of a single room.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUtilization {
    pub room_area_m2: f64,
    pub used_area_m2: f64,
    pub remaining_area_m2: f64,
    /// Used area as a percentage of room area; `0.0` for a zero-area room.
    pub utilization_percent: f64,
    pub asset_count: usize,
    pub total_value: f64,
}

/// Compute floor usage for `room` holding `assets`.
pub fn room_utilization(room: &Room, assets: &[Asset]) -> RoomUtilization {
    let room_area_m2 = room.area_m2();
    let used_area_m2 = capacity::cm2_to_m2(capacity::used_area_cm2(assets));
    let utilization_percent = if room_area_m2 > 0.0 {
        used_area_m2 / room_area_m2 * 100.0
    } else {
        0.0
    };

    RoomUtilization {
        room_area_m2,
        used_area_m2,
        remaining_area_m2: room_area_m2 - used_area_m2,
        utilization_percent,
        asset_count: assets.len(),
        total_value: total_value(assets),
    }
}

/// Footprint of a single asset in m², as shown in the room's asset table.
pub fn asset_area_m2(asset: &Asset) -> f64 {
    capacity::cm2_to_m2(asset.footprint_cm2())
}

// ---------------------------------------------------------------------------
// Dashboard / inventory
// ---------------------------------------------------------------------------

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rooms: usize,
    pub total_assets: usize,
    pub total_value: f64,
    pub total_area_m2: f64,
}

/// Dashboard numbers plus per-category breakdown and averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub average_asset_value: f64,
    pub average_room_area_m2: f64,
    pub assets_by_category: BTreeMap<String, usize>,
}

/// Sum of purchase prices; assets without a price count as zero.
pub fn total_value(assets: &[Asset]) -> f64 {
    assets.iter().filter_map(|a| a.purchase_price).sum()
}

pub fn dashboard_stats(rooms: &[Room], assets: &[Asset]) -> DashboardStats {
    DashboardStats {
        total_rooms: rooms.len(),
        total_assets: assets.len(),
        total_value: total_value(assets),
        total_area_m2: rooms.iter().map(Room::area_m2).sum(),
    }
}

pub fn inventory_report(rooms: &[Room], assets: &[Asset]) -> InventoryReport {
    let stats = dashboard_stats(rooms, assets);

    let mut assets_by_category = BTreeMap::new();
    for asset in assets {
        let category = asset
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        *assets_by_category.entry(category.to_string()).or_insert(0) += 1;
    }

    let average_asset_value = if stats.total_assets > 0 {
        stats.total_value / stats.total_assets as f64
    } else {
        0.0
    };
    let average_room_area_m2 = if stats.total_rooms > 0 {
        stats.total_area_m2 / stats.total_rooms as f64
    } else {
        0.0
    };

    InventoryReport {
        stats,
        average_asset_value,
        average_room_area_m2,
        assets_by_category,
    }
}
