//! Edges, axes, and the surface dimension each edge measures against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Offset dimension shared by the two edges facing each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal offset, fed by the left and right edges.
    X,
    /// Vertical offset, fed by the top and bottom edges.
    Y,
}

impl Axis {
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Surface dimension used as an edge's maximum scroll extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extent {
    Width,
    Height,
}

/// One of the four boundaries of a scrollable surface.
///
/// The integer codes match the usual edge-effect factory constants:
/// left 0, top 1, right 2, bottom 3.
///
/// ```rust
/// use overscroll::{Axis, Direction};
///
/// let dir = Direction::try_from(3).unwrap();
/// assert_eq!(dir, Direction::Bottom);
/// assert_eq!(dir.axis(), Axis::Y);
/// assert!(Direction::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
        }
    }

    /// Sign of the offset this edge produces for a positive pull.
    ///
    /// Start edges (left, top) push content forward; end edges pull it back.
    pub const fn polarity(self) -> f32 {
        match self {
            Self::Left | Self::Top => 1.0,
            Self::Right | Self::Bottom => -1.0,
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Left),
            1 => Ok(Self::Top),
            2 => Ok(Self::Right),
            3 => Ok(Self::Bottom),
            other => Err(Error::UnknownDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(dir.code()).unwrap(), dir);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            Direction::try_from(-1),
            Err(Error::UnknownDirection(-1))
        ));
    }

    #[test]
    fn test_axis_pairs() {
        assert_eq!(Direction::Left.axis(), Direction::Right.axis());
        assert_eq!(Direction::Top.axis(), Direction::Bottom.axis());
        assert_ne!(Direction::Left.axis(), Direction::Top.axis());
    }

    #[test]
    fn test_polarity() {
        assert_eq!(Direction::Left.polarity(), 1.0);
        assert_eq!(Direction::Top.polarity(), 1.0);
        assert_eq!(Direction::Right.polarity(), -1.0);
        assert_eq!(Direction::Bottom.polarity(), -1.0);
    }
}
