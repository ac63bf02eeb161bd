//! The `Car` state machine.

use lift_core::{CallDirection, CarId, Direction, MotionState};

use crate::{CarError, CarResult, sweep};

// ── CarSnapshot ───────────────────────────────────────────────────────────────

/// An owned, point-in-time copy of one car's observable state.
///
/// Built fresh by [`Car::snapshot`] on every call.  Holding one never
/// borrows the car.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSnapshot {
    pub id:               CarId,
    pub current_floor:    u32,
    pub direction:        Direction,
    pub motion:           MotionState,
    pub destinations:     Vec<u32>,
    pub next_destination: Option<u32>,
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// Fields are private: the controller is the only mutator, and everyone else
/// sees cars through `&Car` or [`CarSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id:            CarId,
    total_floors:  u32,
    current_floor: u32,
    direction:     Direction,
    motion:        MotionState,
    /// Distinct floors, SCAN-ordered.  Never gains `current_floor`; holds it
    /// only as the head on arrival, until `stop_at_floor`.
    destinations:  Vec<u32>,
}

impl Car {
    /// A car idle at floor 1.
    pub fn new(id: CarId, total_floors: u32) -> Self {
        Self {
            id,
            total_floors,
            current_floor: 1,
            direction:     Direction::Idle,
            motion:        MotionState::Idle,
            destinations:  Vec::new(),
        }
    }

    /// A car idle at `floor`.  Used for initial placement only.
    pub fn placed(id: CarId, floor: u32, total_floors: u32) -> CarResult<Self> {
        let mut car = Self::new(id, total_floors);
        car.check_floor(floor)?;
        car.current_floor = floor;
        Ok(car)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn total_floors(&self) -> u32 {
        self.total_floors
    }

    #[inline]
    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// The SCAN-ordered destination queue.
    #[inline]
    pub fn destinations(&self) -> &[u32] {
        &self.destinations
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.destinations.len()
    }

    /// The queue head: the next floor this car will serve.
    #[inline]
    pub fn next_destination(&self) -> Option<u32> {
        self.destinations.first().copied()
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            id:               self.id,
            current_floor:    self.current_floor,
            direction:        self.direction,
            motion:           self.motion,
            destinations:     self.destinations.clone(),
            next_destination: self.next_destination(),
        }
    }

    // ── Queue management ──────────────────────────────────────────────────

    /// Queue `floor` as a destination.
    ///
    /// Returns `Ok(true)` if the floor was queued, `Ok(false)` if it was
    /// already queued or is the current floor, and `Err` (no state change)
    /// if it lies outside the building.
    pub fn add_destination(&mut self, floor: u32) -> CarResult<bool> {
        self.check_floor(floor)?;
        if floor == self.current_floor || self.destinations.contains(&floor) {
            return Ok(false);
        }
        self.destinations.push(floor);
        self.sort_destinations();
        // A stationary car commits to a direction as soon as it has work.
        if self.direction == Direction::Idle && self.motion == MotionState::Idle {
            self.update_direction();
        }
        Ok(true)
    }

    /// Reorder the queue for the current direction (see [`sweep::order`]).
    pub fn sort_destinations(&mut self) {
        sweep::order(&mut self.destinations, self.current_floor, self.direction);
    }

    /// Drop the queue head.  No-op on an empty queue.
    pub fn remove_current_destination(&mut self) -> Option<u32> {
        if self.destinations.is_empty() {
            None
        } else {
            Some(self.destinations.remove(0))
        }
    }

    /// Recompute direction from the queue head and re-sort if it changed.
    ///
    /// A head equal to the current floor leaves the direction untouched.
    pub fn update_direction(&mut self) {
        let next = match self.next_destination() {
            None => Direction::Idle,
            Some(f) if f > self.current_floor => Direction::Up,
            Some(f) if f < self.current_floor => Direction::Down,
            Some(_) => self.direction,
        };
        if next != self.direction {
            self.direction = next;
            self.sort_destinations();
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Idle → Moving`: advance one floor toward the queue head.
    ///
    /// Returns `false` (no state change beyond the direction refresh) if the
    /// car is not idle, has no destination, or is already at the boundary in
    /// its direction of travel.
    pub fn move_one_floor(&mut self) -> bool {
        if self.motion != MotionState::Idle {
            return false;
        }
        self.update_direction();

        match self.direction {
            Direction::Up if self.current_floor < self.total_floors => {
                self.current_floor += 1;
                self.motion = MotionState::Moving;
                true
            }
            Direction::Down if self.current_floor > 1 => {
                self.current_floor -= 1;
                self.motion = MotionState::Moving;
                true
            }
            _ => false,
        }
    }

    /// `Moving → Idle`.  Does not check for a stop.
    pub fn complete_movement(&mut self) {
        self.motion = MotionState::Idle;
    }

    #[inline]
    pub fn should_stop_at_current_floor(&self) -> bool {
        self.destinations.contains(&self.current_floor)
    }

    /// `→ Loading`: open the doors and drop the current floor from the queue.
    pub fn stop_at_floor(&mut self) {
        self.motion = MotionState::Loading;
        let here = self.current_floor;
        self.destinations.retain(|&f| f != here);
    }

    /// `Loading → Idle`, recomputing direction from the new queue head.
    pub fn complete_loading(&mut self) {
        self.motion = MotionState::Idle;
        self.update_direction();
    }

    // ── Dispatch helpers ──────────────────────────────────────────────────

    #[inline]
    pub fn distance_to_floor(&self, floor: u32) -> u32 {
        self.current_floor.abs_diff(floor)
    }

    /// `true` if serving a `requested` call at `floor` fits the car's
    /// current commitment: the car is idle, or it is already heading that
    /// way and `floor` is strictly ahead.
    pub fn is_moving_towards(&self, floor: u32, requested: CallDirection) -> bool {
        match (self.direction, requested) {
            (Direction::Idle, _)                 => true,
            (Direction::Up, CallDirection::Up)     => floor > self.current_floor,
            (Direction::Down, CallDirection::Down) => floor < self.current_floor,
            _                                    => false,
        }
    }

    fn check_floor(&self, floor: u32) -> CarResult<()> {
        if (1..=self.total_floors).contains(&floor) {
            Ok(())
        } else {
            Err(CarError::InvalidFloor {
                car:          self.id,
                floor,
                total_floors: self.total_floors,
            })
        }
    }
}
