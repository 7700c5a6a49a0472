use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// A cell on the game grid, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `heading`.
    ///
    /// Stepping North from row 0 or West from column 0 wraps around to
    /// `u32::MAX`, which is outside every grid and so reads as a wall.
    pub fn stepped(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x.wrapping_add_signed(dx),
            y: self.y.wrapping_add_signed(dy),
        }
    }

    /// Check if the cell lies inside a `grid_size` x `grid_size` grid
    pub fn is_within(self, grid_size: u32) -> bool {
        self.x < grid_size && self.y < grid_size
    }
}

/// The snake in the game
///
/// Segments are stored oldest first; the head is always the last segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
    heading: Option<Heading>,
}

impl Snake {
    /// Create a single-segment snake with no heading yet
    pub fn new(start: Coordinate) -> Self {
        Self {
            body: VecDeque::from([start]),
            heading: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Coordinate], heading: Heading) -> Self {
        assert!(!segments.is_empty());
        Self {
            body: segments.iter().copied().collect(),
            heading: Some(heading),
        }
    }

    /// Get the head position
    pub fn head(&self) -> Coordinate {
        // body is never empty
        self.body[self.body.len() - 1]
    }

    /// Get the tail position (oldest segment)
    pub fn tail(&self) -> Coordinate {
        self.body[0]
    }

    /// Body segments, tail first and head last
    pub fn body(&self) -> &VecDeque<Coordinate> {
        &self.body
    }

    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }

    /// Overwrite the heading; legality is the board's concern
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = Some(heading);
    }

    /// Cell the head would enter on the next move, if a heading is set
    pub fn next_head_location(&self) -> Option<Coordinate> {
        self.heading.map(|heading| self.head().stepped(heading))
    }

    /// Move one cell along the heading, keeping the tail if `grew`.
    ///
    /// Performs no bounds or collision checks.
    pub fn advance(&mut self, grew: bool) {
        let Some(next) = self.next_head_location() else {
            return;
        };

        self.body.push_back(next);
        if !grew {
            self.body.pop_front();
        }
    }

    /// Check if any segment sits on `cell`
    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.body.contains(&cell)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Food eaten so far
    pub fn score(&self) -> u32 {
        (self.body.len() - 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_stepping() {
        let cell = Coordinate::new(5, 5);
        assert_eq!(cell.stepped(Heading::North), Coordinate::new(5, 4));
        assert_eq!(cell.stepped(Heading::East), Coordinate::new(6, 5));
        assert_eq!(cell.stepped(Heading::South), Coordinate::new(5, 6));
        assert_eq!(cell.stepped(Heading::West), Coordinate::new(4, 5));
    }

    #[test]
    fn test_stepping_off_origin_wraps_out_of_grid() {
        let origin = Coordinate::new(0, 0);
        let north = origin.stepped(Heading::North);
        let west = origin.stepped(Heading::West);

        assert_eq!(north.y, u32::MAX);
        assert_eq!(west.x, u32::MAX);
        assert!(!north.is_within(20));
        assert!(!west.is_within(20));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Coordinate::new(9, 9));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.head(), Coordinate::new(9, 9));
        assert_eq!(snake.tail(), Coordinate::new(9, 9));
        assert_eq!(snake.heading(), None);
        assert_eq!(snake.next_head_location(), None);
    }

    #[test]
    fn test_advance_without_heading_is_noop() {
        let mut snake = Snake::new(Coordinate::new(3, 3));
        snake.advance(true);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Coordinate::new(3, 3));
    }

    #[test]
    fn test_next_head_location_is_pure() {
        let mut snake = Snake::new(Coordinate::new(3, 3));
        snake.set_heading(Heading::South);
        assert_eq!(snake.next_head_location(), Some(Coordinate::new(3, 4)));
        assert_eq!(snake.head(), Coordinate::new(3, 3));
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Coordinate::new(5, 5));
        snake.set_heading(Heading::East);

        // Grow twice, then slide
        snake.advance(true);
        snake.advance(true);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.score(), 2);
        assert_eq!(snake.head(), Coordinate::new(7, 5));

        snake.set_heading(Heading::South);
        snake.advance(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![
                Coordinate::new(6, 5),
                Coordinate::new(7, 5),
                Coordinate::new(7, 6)
            ]
        );
    }

    #[test]
    fn test_occupancy() {
        let snake = Snake::from_segments(
            &[
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
            ],
            Heading::East,
        );
        assert!(snake.occupies(Coordinate::new(1, 1)));
        assert!(snake.occupies(Coordinate::new(3, 1)));
        assert!(!snake.occupies(Coordinate::new(4, 1)));
        assert_eq!(snake.head(), Coordinate::new(3, 1));
        assert_eq!(snake.tail(), Coordinate::new(1, 1));
    }
}
