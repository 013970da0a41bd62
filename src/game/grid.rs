use super::action::Direction;
use super::state::Position;

/// Fixed-size board whose edges wrap around (a torus)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Bring a coordinate that stepped one cell off the board back onto the
    /// opposite edge
    pub fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        (wrap_axis(x, self.width), wrap_axis(y, self.height))
    }

    /// The cell one step from pos in direction, wrapping at the edges
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Position {
        let moved = pos.moved_in_direction(direction);
        let (x, y) = self.wrap(moved.x, moved.y);
        Position::new(x, y)
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    /// Every cell of the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

fn wrap_axis(value: i32, dimension: i32) -> i32 {
    if value < 0 {
        dimension - 1
    } else if value >= dimension {
        0
    } else {
        value
    }
}
