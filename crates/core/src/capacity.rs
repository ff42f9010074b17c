//! Floor-area capacity guard for placing assets in a room.
//!
//! An asset's footprint includes its clearance margins. Side clearance
//! applies to both the left and right of the asset, so it is doubled on the
//! length axis; front and back clearances are independent and simply added
//! on the width axis:
//!
//! ```text
//! footprint = (length + 2 * sides) * (width + front + back)
//! ```
//!
//! A placement fits when the room's existing footprints plus the candidate's
//! stay within the room's floor area.

use serde::Serialize;

/// Square centimetres per square metre.
pub const CM2_PER_M2: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Footprint
// ---------------------------------------------------------------------------

/// Anything with asset dimensions and clearances, in centimetres.
pub trait FootprintDimensions {
    fn length_cm(&self) -> f64;
    fn width_cm(&self) -> f64;
    fn clearance_front_cm(&self) -> f64;
    fn clearance_sides_cm(&self) -> f64;
    fn clearance_back_cm(&self) -> f64;

    /// Effective floor-plan area in cm², clearances included.
    fn footprint_cm2(&self) -> f64 {
        footprint_cm2(
            self.length_cm(),
            self.width_cm(),
            self.clearance_front_cm(),
            self.clearance_sides_cm(),
            self.clearance_back_cm(),
        )
    }
}

/// Footprint area in cm² from raw dimensions.
pub fn footprint_cm2(
    length_cm: f64,
    width_cm: f64,
    clearance_front_cm: f64,
    clearance_sides_cm: f64,
    clearance_back_cm: f64,
) -> f64 {
    let length = length_cm + 2.0 * clearance_sides_cm;
    let width = width_cm + clearance_front_cm + clearance_back_cm;
    length * width
}

/// Room floor area in cm² from dimensions in metres.
pub fn room_area_cm2(length_m: f64, width_m: f64) -> f64 {
    length_m * width_m * CM2_PER_M2
}

/// Convert cm² to m².
pub fn cm2_to_m2(area_cm2: f64) -> f64 {
    area_cm2 / CM2_PER_M2
}

/// Sum of footprints over a set of assets.
pub fn used_area_cm2<'a, A, I>(assets: I) -> f64
where
    A: FootprintDimensions + 'a,
    I: IntoIterator<Item = &'a A>,
{
    assets.into_iter().map(FootprintDimensions::footprint_cm2).sum()
}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

/// Outcome of a capacity check. Computed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityCheck {
    pub room_area_cm2: f64,
    pub used_area_cm2: f64,
    pub candidate_area_cm2: f64,
    pub fits: bool,
}

impl CapacityCheck {
    /// Build a check from precomputed areas.
    ///
    /// A candidate with zero footprint always fits.
    pub fn from_areas(room_area_cm2: f64, used_area_cm2: f64, candidate_area_cm2: f64) -> Self {
        let fits =
            candidate_area_cm2 == 0.0 || used_area_cm2 + candidate_area_cm2 <= room_area_cm2;
        Self {
            room_area_cm2,
            used_area_cm2,
            candidate_area_cm2,
            fits,
        }
    }

    /// Floor area left before the candidate is placed (may be negative when
    /// the room is already over-committed).
    pub fn remaining_area_cm2(&self) -> f64 {
        self.room_area_cm2 - self.used_area_cm2
    }

    /// Convert a failed check into a [`CapacityViolation`].
    pub fn ensure_fits(self) -> Result<Self, CapacityViolation> {
        if self.fits {
            Ok(self)
        } else {
            Err(CapacityViolation {
                room_area_cm2: self.room_area_cm2,
                used_area_cm2: self.used_area_cm2,
                candidate_area_cm2: self.candidate_area_cm2,
            })
        }
    }
}

/// Check whether `candidate` fits in a `length_m` x `width_m` room that
/// already holds `existing`.
pub fn check_capacity<'a, A, C, I>(
    length_m: f64,
    width_m: f64,
    existing: I,
    candidate: &C,
) -> CapacityCheck
where
    A: FootprintDimensions + 'a,
    C: FootprintDimensions + ?Sized,
    I: IntoIterator<Item = &'a A>,
{
    CapacityCheck::from_areas(
        room_area_cm2(length_m, width_m),
        used_area_cm2(existing),
        candidate.footprint_cm2(),
    )
}

/// A placement rejected because the room would overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityViolation {
    pub room_area_cm2: f64,
    pub used_area_cm2: f64,
    pub candidate_area_cm2: f64,
}

impl std::fmt::Display for CapacityViolation {
    /// Reports every area in m² rounded to two decimals.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Asset is too large! Room has {:.2}m² total, {:.2}m² already used, this asset needs {:.2}m²",
            cm2_to_m2(self.room_area_cm2),
            cm2_to_m2(self.used_area_cm2),
            cm2_to_m2(self.candidate_area_cm2),
        )
    }
}

impl std::error::Error for CapacityViolation {}
