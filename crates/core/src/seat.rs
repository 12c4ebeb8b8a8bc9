// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seats.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A seat at a Landlord table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Seat(u8);

/// Error returned when converting an out of range seat index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid seat index {0}")]
pub struct InvalidSeat(pub u8);

impl Seat {
    /// The number of seats at the table.
    pub const COUNT: usize = 3;

    /// All the seats in turn order.
    pub const ALL: [Seat; Self::COUNT] = [Seat(0), Seat(1), Seat(2)];

    /// Creates a seat given its index.
    ///
    /// Panics if the index is not less than [Seat::COUNT].
    pub fn new(index: usize) -> Seat {
        assert!(index < Self::COUNT, "Invalid seat index {index}");
        Seat(index as u8)
    }

    /// The seat index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    pub fn next(&self) -> Seat {
        Seat((self.0 + 1) % Self::COUNT as u8)
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl TryFrom<u8> for Seat {
    type Error = InvalidSeat;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < Self::COUNT {
            Ok(Seat(index))
        } else {
            Err(InvalidSeat(index))
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order_wraps() {
        assert_eq!(Seat::new(0).next(), Seat::new(1));
        assert_eq!(Seat::new(1).next(), Seat::new(2));
        assert_eq!(Seat::new(2).next(), Seat::new(0));
        assert_eq!(Seat::ALL.map(|s| s.index()), [0, 1, 2]);
    }

    #[test]
    fn serde_checks_index() {
        assert_eq!(serde_json::to_string(&Seat::new(2)).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Seat>("1").unwrap(), Seat::new(1));
        assert!(serde_json::from_str::<Seat>("3").is_err());
        assert!(serde_json::from_str::<Seat>("7").is_err());
        assert_eq!(Seat::try_from(5), Err(InvalidSeat(5)));
    }

    #[test]
    #[should_panic(expected = "Invalid seat index")]
    fn invalid_seat() {
        Seat::new(3);
    }
}
