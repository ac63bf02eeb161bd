//! Travel direction and motion state enums.

use std::fmt;
use std::str::FromStr;

use crate::LiftError;

/// The direction a car is committed to.
///
/// `Idle` means the car has no destination and can be redirected freely.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

/// The direction a passenger asked for with a hall-call button.
///
/// Narrower than [`Direction`]: a hall call is never idle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CallDirection {
    Up,
    Down,
}

/// What a car is physically doing right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MotionState {
    #[default]
    Idle,
    /// Travelling between two adjacent floors.
    Moving,
    /// Stopped with doors open; passengers boarding or leaving.
    Loading,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "UP",
            Direction::Down => "DOWN",
            Direction::Idle => "IDLE",
        }
    }
}

impl CallDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            CallDirection::Up   => "UP",
            CallDirection::Down => "DOWN",
        }
    }
}

impl MotionState {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle    => "IDLE",
            MotionState::Moving  => "MOVING",
            MotionState::Loading => "LOADING",
        }
    }
}

impl From<CallDirection> for Direction {
    #[inline]
    fn from(d: CallDirection) -> Direction {
        match d {
            CallDirection::Up   => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }
}

impl PartialEq<CallDirection> for Direction {
    fn eq(&self, other: &CallDirection) -> bool {
        *self == Direction::from(*other)
    }
}

impl FromStr for CallDirection {
    type Err = LiftError;

    /// Accepts `up`/`down` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up"   => Ok(CallDirection::Up),
            "down" => Ok(CallDirection::Down),
            other  => Err(LiftError::Parse(format!(
                "invalid call direction {other:?}: expected \"up\" or \"down\""
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
