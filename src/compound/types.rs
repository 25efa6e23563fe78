//! Tag sets used to parameterize move and rotate requests

use std::fmt;

use crate::gfx::scene::node::Axis;

/// Translation direction of the whole compound object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backwards,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backwards,
    ];

    /// World axis this direction moves along
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
            Direction::Forward | Direction::Backwards => Axis::Z,
        }
    }

    /// Sign applied to the step along [`Direction::axis`]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up | Direction::Right | Direction::Forward => 1.0,
            Direction::Down | Direction::Left | Direction::Backwards => -1.0,
        }
    }
}

/// Segment slot of the compound object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Primary,
    Secondary,
    Tertiary,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::Primary, Rank::Secondary, Rank::Tertiary];

    pub(crate) fn index(self) -> usize {
        match self {
            Rank::Primary => 0,
            Rank::Secondary => 1,
            Rank::Tertiary => 2,
        }
    }

    /// Fixed axis the segment pivots around
    pub fn pivot_axis(self) -> Axis {
        match self {
            Rank::Primary => Axis::Z,
            Rank::Secondary => Axis::X,
            Rank::Tertiary => Axis::Y,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Primary => "primary",
            Rank::Secondary => "secondary",
            Rank::Tertiary => "tertiary",
        };
        f.write_str(name)
    }
}

/// Rotation sense; left is positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions_share_axis() {
        let pairs = [
            (Direction::Up, Direction::Down),
            (Direction::Left, Direction::Right),
            (Direction::Forward, Direction::Backwards),
        ];
        for (a, b) in pairs {
            assert_eq!(a.axis(), b.axis());
            assert_eq!(a.sign(), -b.sign());
        }
    }

    #[test]
    fn test_each_rank_has_distinct_pivot() {
        assert_eq!(Rank::Primary.pivot_axis(), Axis::Z);
        assert_eq!(Rank::Secondary.pivot_axis(), Axis::X);
        assert_eq!(Rank::Tertiary.pivot_axis(), Axis::Y);
        assert_eq!(Rank::Secondary.to_string(), "secondary");
    }
}
