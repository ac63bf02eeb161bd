//! Strongly typed car identifier.
//!
//! Car ids are 1-based (car 1 is the first car in the bank) because they are
//! shown to users verbatim in log lines.  Use [`CarId::index`] to address the
//! controller's `Vec<Car>`.

use std::fmt;

/// Identifier of one car in the bank.  Assigned at construction, never reused
/// within a generation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarId(pub u32);

impl CarId {
    /// The first car of every bank.
    pub const FIRST: CarId = CarId(1);

    /// Zero-based position in the controller's car list.
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn from_index(index: usize) -> CarId {
        CarId(index as u32 + 1)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<CarId> for u32 {
    #[inline(always)]
    fn from(id: CarId) -> u32 {
        id.0
    }
}
