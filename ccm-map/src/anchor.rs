//! Tooltip anchoring on a horizontally wrapped world map.
//!
//! When zoomed out, the map repeats the world side by side, so a pointer can
//! sit over a copy of a feature whose longitude differs from the stored one
//! by a multiple of 360°. The tooltip has to anchor to the copy under the
//! pointer.

use serde::{Deserialize, Serialize};

/// Half of a full turn of longitude.
const HALF_TURN: f64 = 180.0;
const FULL_TURN: f64 = 360.0;

/// A geographic position in degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        LngLat { lng, lat }
    }
}

/// Where a tooltip is placed; recomputed for every displayed hover.
pub type TooltipAnchor = LngLat;

/// Shift `lng` by whole turns toward `pointer_lng` until the two are at most
/// 180° apart.
///
/// The number of turns is computed up front, so arbitrarily far pointer
/// longitudes cost the same as near ones. Non-finite inputs are returned
/// unchanged. Once the pointer is so far out that neighbouring floats are
/// more than a turn apart, the result is the nearest representable copy.
pub fn normalize_longitude(lng: f64, pointer_lng: f64) -> f64 {
    if !lng.is_finite() || !pointer_lng.is_finite() {
        return lng;
    }
    let diff = pointer_lng - lng;
    if diff.abs() <= HALF_TURN {
        return lng;
    }
    let step = if diff > 0.0 { FULL_TURN } else { -FULL_TURN };
    let turns = ((diff.abs() - HALF_TURN) / FULL_TURN).ceil();
    let mut adjusted = lng + step * turns;
    // Rounding can leave the result a hair outside the window; one more turn
    // fixes that, and a turn that no longer changes the value ends the search.
    for _ in 0..2 {
        if (pointer_lng - adjusted).abs() <= HALF_TURN {
            break;
        }
        let next = adjusted + if pointer_lng > adjusted { FULL_TURN } else { -FULL_TURN };
        if next == adjusted {
            break;
        }
        adjusted = next;
    }
    adjusted
}

/// Anchor for a feature at `feature`, given the pointer position.
/// Latitude passes through unchanged.
pub fn tooltip_anchor(feature: LngLat, pointer: LngLat) -> TooltipAnchor {
    LngLat::new(normalize_longitude(feature.lng, pointer.lng), feature.lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_world_copy_untouched() {
        assert_eq!(normalize_longitude(12.5, 10.0), 12.5);
        assert_eq!(normalize_longitude(-170.0, 10.0), -170.0);
        // Exactly 180 apart is already within the window
        assert_eq!(normalize_longitude(-90.0, 90.0), -90.0);
    }

    #[test]
    fn test_shifts_toward_pointer() {
        assert_eq!(normalize_longitude(12.5, 370.0), 372.5);
        assert_eq!(normalize_longitude(12.5, -350.0), -347.5);
        assert_eq!(normalize_longitude(179.0, -179.0), -181.0);
        assert_eq!(normalize_longitude(-179.0, 179.0), 181.0);
        assert_eq!(normalize_longitude(0.0, 1080.0), 1080.0);
    }

    #[test]
    fn test_matches_stepwise_shifting() {
        let stepwise = |mut lng: f64, pointer: f64| {
            while (pointer - lng).abs() > 180.0 {
                lng += if pointer > lng { 360.0 } else { -360.0 };
            }
            lng
        };
        for &lng in &[-180.0, -97.3, 0.0, 12.56738, 151.2093, 180.0] {
            for &pointer in &[-1000.0, -540.0, -181.0, 0.0, 181.0, 540.0, 725.25, 1999.0] {
                let (direct, stepped) = (normalize_longitude(lng, pointer), stepwise(lng, pointer));
                assert!(
                    (direct - stepped).abs() < 1e-9,
                    "lng={} pointer={}: {} vs {}",
                    lng,
                    pointer,
                    direct,
                    stepped
                );
            }
        }
    }

    #[test]
    fn test_result_within_half_turn_and_idempotent() {
        for i in -40..=40 {
            let pointer = i as f64 * 47.3;
            for &lng in &[-180.0, -45.0, 0.0, 33.3, 179.9] {
                let once = normalize_longitude(lng, pointer);
                assert!((once - pointer).abs() <= 180.0);
                assert_eq!(normalize_longitude(once, pointer), once);
            }
        }
    }

    #[test]
    fn test_far_pointer_is_cheap() {
        let adjusted = normalize_longitude(10.0, 3.6e9 + 10.0);
        assert!((adjusted - (3.6e9 + 10.0)).abs() <= 180.0);
    }

    #[test]
    fn test_huge_pointer_longitudes_terminate() {
        // Exactly representable within a turn: the window still holds
        for &pointer in &[1e15, -7.5e15, 2.9e15] {
            let adjusted = normalize_longitude(-12.3, pointer);
            assert!((adjusted - pointer).abs() <= 180.0, "pointer={}", pointer);
        }
        // Beyond that the call only has to come back with a finite copy
        for &pointer in &[2.9e17, -4.2e18, 9.007e18, 1e300] {
            for &lng in &[-12.3, 0.0, 179.9] {
                let adjusted = normalize_longitude(lng, pointer);
                assert!(adjusted.is_finite(), "lng={} pointer={}", lng, pointer);
            }
        }
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(normalize_longitude(10.0, f64::INFINITY), 10.0);
        assert!(normalize_longitude(f64::NAN, 10.0).is_nan());
    }

    #[test]
    fn test_anchor_keeps_latitude() {
        let anchor = tooltip_anchor(LngLat::new(12.5, 41.9), LngLat::new(372.0, -5.0));
        assert_eq!(anchor, LngLat::new(372.5, 41.9));
    }
}
