//! The `DispatchPolicy` trait and arg-min car selection.

use lift_car::Car;
use lift_core::{CallDirection, CarId};

use crate::ScoreCache;

/// Pluggable assignment heuristic.
///
/// Lower scores are better.  Implementations must be pure: the same car
/// state and call always produce the same score, which is what makes
/// [`ScoreCache`] sound.
///
/// # Example
///
/// ```rust,ignore
/// struct PreferCarOne;
///
/// impl DispatchPolicy for PreferCarOne {
///     fn score(&self, car: &Car, floor: u32, _dir: CallDirection) -> u32 {
///         if car.id() == CarId(1) { 0 } else { car.distance_to_floor(floor) + 1 }
///     }
/// }
/// ```
pub trait DispatchPolicy {
    fn score(&self, car: &Car, floor: u32, direction: CallDirection) -> u32;
}

/// The winner of a selection round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub car:   CarId,
    pub score: u32,
}

/// Score every car in `cars` and return the best one.
///
/// `cars` must be in ascending id order; the first minimum wins, so ties go
/// to the lowest id.  Returns `None` only for an empty slice.
///
/// When `cache` is given, scores are looked up by each car's signature
/// before calling the policy.
pub fn select_car<P: DispatchPolicy + ?Sized>(
    policy:    &P,
    cars:      &[Car],
    floor:     u32,
    direction: CallDirection,
    mut cache: Option<&mut ScoreCache>,
) -> Option<Assignment> {
    let mut best: Option<Assignment> = None;

    for car in cars {
        let score = match cache.as_deref_mut() {
            Some(c) => c.get_or_compute(car, floor, direction, || {
                policy.score(car, floor, direction)
            }),
            None => policy.score(car, floor, direction),
        };
        if best.is_none_or(|b| score < b.score) {
            best = Some(Assignment { car: car.id(), score });
        }
    }

    best
}
