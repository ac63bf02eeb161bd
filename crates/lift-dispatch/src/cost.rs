//! The default distance-plus-penalty heuristic.

use lift_car::Car;
use lift_core::{CallDirection, Direction};

use crate::DispatchPolicy;

/// Scores a car by travel distance, penalising cars committed elsewhere.
///
/// | Car state                                   | Score                                   |
/// |---------------------------------------------|-----------------------------------------|
/// | direction `Idle`                            | `distance`                              |
/// | heading the call's way, floor strictly ahead| `distance`                              |
/// | anything else                               | `distance + misalignment + per_stop × queue_len` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostDispatcher {
    /// Flat cost of interrupting a car committed to a divergent route.
    pub misalignment_penalty: u32,
    /// Extra cost per stop already queued on a misaligned car.
    pub per_stop_surcharge:   u32,
}

impl CostDispatcher {
    pub const DEFAULT_MISALIGNMENT_PENALTY: u32 = 20;
    pub const DEFAULT_PER_STOP_SURCHARGE:   u32 = 5;

    pub fn new(misalignment_penalty: u32, per_stop_surcharge: u32) -> Self {
        Self { misalignment_penalty, per_stop_surcharge }
    }
}

impl Default for CostDispatcher {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MISALIGNMENT_PENALTY,
            Self::DEFAULT_PER_STOP_SURCHARGE,
        )
    }
}

impl DispatchPolicy for CostDispatcher {
    fn score(&self, car: &Car, floor: u32, direction: CallDirection) -> u32 {
        let distance = car.distance_to_floor(floor);

        if car.direction() == Direction::Idle || car.is_moving_towards(floor, direction) {
            return distance;
        }

        let queued = u32::try_from(car.queue_len()).unwrap_or(u32::MAX);
        distance
            .saturating_add(self.misalignment_penalty)
            .saturating_add(self.per_stop_surcharge.saturating_mul(queued))
    }
}
