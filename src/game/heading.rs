use serde::{Deserialize, Serialize};

/// Compass heading of the snake, in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings, clockwise starting from North
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of this heading in the clockwise cycle (North = 0)
    pub fn index(self) -> u8 {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Heading a quarter turn clockwise from this one
    pub fn clockwise(self) -> Heading {
        Self::ALL[usize::from((self.index() + 1) % 4)]
    }

    /// Heading a quarter turn counter-clockwise from this one
    pub fn counter_clockwise(self) -> Heading {
        Self::ALL[usize::from((self.index() + 3) % 4)]
    }

    /// Heading pointing the other way
    pub fn reverse(self) -> Heading {
        Self::ALL[usize::from((self.index() + 2) % 4)]
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Heading) -> bool {
        (4 + other.index() - self.index()) % 4 == 2
    }

    /// Returns the delta (dx, dy) for one step; y grows southwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_headings() {
        assert!(Heading::North.is_opposite(Heading::South));
        assert!(Heading::South.is_opposite(Heading::North));
        assert!(Heading::East.is_opposite(Heading::West));
        assert!(Heading::West.is_opposite(Heading::East));

        assert!(!Heading::North.is_opposite(Heading::East));
        assert!(!Heading::North.is_opposite(Heading::West));
        assert!(!Heading::North.is_opposite(Heading::North));
    }

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Heading::North.clockwise(), Heading::East);
        assert_eq!(Heading::West.clockwise(), Heading::North);
        assert_eq!(Heading::North.counter_clockwise(), Heading::West);

        for heading in Heading::ALL {
            assert_eq!(heading.clockwise().counter_clockwise(), heading);
            assert_eq!(heading.reverse().reverse(), heading);
            assert!(heading.is_opposite(heading.reverse()));
        }
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::North.delta(), (0, -1));
        assert_eq!(Heading::East.delta(), (1, 0));
        assert_eq!(Heading::South.delta(), (0, 1));
        assert_eq!(Heading::West.delta(), (-1, 0));
    }
}
