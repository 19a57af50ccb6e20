//! Orientation of a quarter-turn rotation.

use std::fmt;

/// One of the four orientations reachable by rotating in 90 degree steps.
///
/// Built from a signed count of clockwise quarter turns; counts that differ
/// by a multiple of four share an orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum QuarterTurn {
    #[default]
    None,
    /// A quarter turn counter-clockwise (-90 degrees).
    RotateLeft,
    /// A quarter turn clockwise (+90 degrees).
    RotateRight,
    /// Half a turn (180 degrees).
    UpsideDown,
}

impl QuarterTurn {
    /// Classifies a signed quarter-turn count.
    ///
    /// Uses the truncating remainder, so `1` and `-3` both rotate right while
    /// `-1` and `3` both rotate left. Total for every `i32`.
    pub fn from_quarter_turns(quarter_turns: i32) -> Self {
        match quarter_turns % 4 {
            1 | -3 => QuarterTurn::RotateRight,
            -1 | 3 => QuarterTurn::RotateLeft,
            2 | -2 => QuarterTurn::UpsideDown,
            _ => QuarterTurn::None,
        }
    }

    /// Paint angle in degrees, clockwise positive.
    pub fn to_degrees(self) -> f32 {
        match self {
            QuarterTurn::None => 0.0,
            QuarterTurn::RotateLeft => -90.0,
            QuarterTurn::RotateRight => 90.0,
            QuarterTurn::UpsideDown => 180.0,
        }
    }

    /// Same as [`Self::to_degrees`].
    pub fn to_angle(self) -> f32 {
        self.to_degrees()
    }

    /// Whether the rotated content occupies transposed width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurn::RotateLeft | QuarterTurn::RotateRight)
    }

    /// Canonical clockwise count in `0..4`.
    pub fn quarter_turns(self) -> i32 {
        match self {
            QuarterTurn::None => 0,
            QuarterTurn::RotateRight => 1,
            QuarterTurn::UpsideDown => 2,
            QuarterTurn::RotateLeft => 3,
        }
    }
}

impl From<i32> for QuarterTurn {
    fn from(quarter_turns: i32) -> Self {
        Self::from_quarter_turns(quarter_turns)
    }
}

impl fmt::Display for QuarterTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuarterTurn::None => "none",
            QuarterTurn::RotateLeft => "rotate_left",
            QuarterTurn::RotateRight => "rotate_right",
            QuarterTurn::UpsideDown => "upside_down",
        };
        f.write_str(name)
    }
}

/// Shorthand for [`QuarterTurn::from_quarter_turns`].
pub fn classify(quarter_turns: i32) -> QuarterTurn {
    QuarterTurn::from_quarter_turns(quarter_turns)
}

#[cfg(test)]
#[path = "tests/quarter_turn_tests.rs"]
mod tests;
