//! Eight-way facing direction embedded in every frame key.
//!
//! The display form (`"Down"`, `"UpLeft"`, ...) is the middle segment of a
//! frame name such as `Walk-UpLeft-3`. The compass form (`"D"`, `"UL"`, ...)
//! is what a [`DirectionController`](crate::components::directionblend::DirectionController)
//! reports as its resolved clip name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Down,
    DownLeft,
    DownRight,
    Left,
    Right,
    Up,
    UpLeft,
    UpRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// Name used inside frame keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "Down",
            Direction::DownLeft => "DownLeft",
            Direction::DownRight => "DownRight",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::UpLeft => "UpLeft",
            Direction::UpRight => "UpRight",
        }
    }

    /// Map a resolved compass clip name (`"U"`, `"UR"`, ...) to a direction.
    ///
    /// Returns `None` for anything that is not one of the eight abbreviations.
    pub fn from_compass(clip: &str) -> Option<Self> {
        match clip {
            "UL" => Some(Direction::UpLeft),
            "U" => Some(Direction::Up),
            "UR" => Some(Direction::UpRight),
            "R" => Some(Direction::Right),
            "DR" => Some(Direction::DownRight),
            "D" => Some(Direction::Down),
            "DL" => Some(Direction::DownLeft),
            "L" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Compass abbreviation, the inverse of [`Direction::from_compass`].
    pub fn compass(&self) -> &'static str {
        match self {
            Direction::Down => "D",
            Direction::DownLeft => "DL",
            Direction::DownRight => "DR",
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Up => "U",
            Direction::UpLeft => "UL",
            Direction::UpRight => "UR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}
