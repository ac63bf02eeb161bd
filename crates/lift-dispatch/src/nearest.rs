//! Nearest-car policy.

use lift_car::Car;
use lift_core::CallDirection;

use crate::DispatchPolicy;

/// A [`DispatchPolicy`] that only looks at distance.
///
/// Useful as a baseline when comparing heuristics, or in tests that want
/// assignment to depend on position alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestCar;

impl DispatchPolicy for NearestCar {
    fn score(&self, car: &Car, floor: u32, _direction: CallDirection) -> u32 {
        car.distance_to_floor(floor)
    }
}
