//! SCAN ("elevator algorithm") ordering of a destination queue.
//!
//! | Direction | Order                                                          |
//! |-----------|----------------------------------------------------------------|
//! | `Up`      | floors ≥ current ascending, then floors < current descending   |
//! | `Down`    | floors ≤ current descending, then floors > current ascending   |
//! | `Idle`    | nearest first by `|floor − current|`, ties keep insertion order |
//!
//! The car finishes its sweep in the committed direction, then serves the
//! reverse trip.

use std::cmp::Reverse;

use lift_core::Direction;

/// Reorder `queue` in place for a car at `current` heading `direction`.
///
/// All sorts are stable.
pub fn order(queue: &mut [u32], current: u32, direction: Direction) {
    match direction {
        Direction::Up => queue.sort_by_key(|&f| {
            if f >= current { (0, f, Reverse(0)) } else { (1, 0, Reverse(f)) }
        }),
        Direction::Down => queue.sort_by_key(|&f| {
            if f <= current { (0, 0, Reverse(f)) } else { (1, f, Reverse(0)) }
        }),
        Direction::Idle => queue.sort_by_key(|&f| f.abs_diff(current)),
    }
}

/// `true` if `queue` is already in the order [`order`] would produce.
///
/// Ties under `Idle` are accepted in any order.
pub fn is_ordered(queue: &[u32], current: u32, direction: Direction) -> bool {
    let mut sorted = queue.to_vec();
    order(&mut sorted, current, direction);
    match direction {
        Direction::Idle => queue
            .iter()
            .zip(&sorted)
            .all(|(a, b)| a.abs_diff(current) == b.abs_diff(current)),
        _ => sorted == queue,
    }
}
