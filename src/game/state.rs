use std::collections::VecDeque;

use super::action::Direction;
use super::error::{GameError, Result};
use super::grid::Grid;
use super::tile::Tile;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction (no wrapping, see [`Grid::neighbor`])
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// One cell of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pos: Position,
    /// Direction of travel when this segment was the head
    pub facing: Direction,
    pub tile: Tile,
    pub skeleton: bool,
}

impl Segment {
    fn new(pos: Position, facing: Direction, tile: Tile) -> Self {
        Self {
            pos,
            facing,
            tile,
            skeleton: false,
        }
    }
}

/// The snake, head first.
///
/// A body is created with three segments and only ever shrinks by one in the
/// same step that grows it by one, so it is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    segments: VecDeque<Segment>,
    /// Skip the next tail removal
    pub pending_growth: bool,
}

impl Body {
    /// Three segments stacked downwards from origin, facing up
    pub fn spawn(origin: Position) -> Self {
        let segments = VecDeque::from([
            Segment::new(origin, Direction::Up, Tile::head(Direction::Up)),
            Segment::new(
                origin.moved_by(0, 1),
                Direction::Up,
                Tile::body(Direction::Up),
            ),
            Segment::new(
                origin.moved_by(0, 2),
                Direction::Up,
                Tile::tail(Direction::Up),
            ),
        ]);

        Self {
            segments,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|seg| seg.pos == pos)
    }

    /// Push a new head one cell away in direction.
    ///
    /// The old head turns into a straight piece or a bend depending on how
    /// the heading changed.
    pub fn advance(&mut self, grid: &Grid, direction: Direction) {
        let old_head = &mut self.segments[0];
        old_head.tile = Tile::joint(old_head.facing, direction);

        let pos = grid.neighbor(old_head.pos, direction);
        self.segments
            .push_front(Segment::new(pos, direction, Tile::head(direction)));
    }

    /// Drop the last segment and point the new tail along the body.
    pub fn remove_tail(&mut self) -> Result<()> {
        let length = self.segments.len();
        if length <= 1 {
            return Err(GameError::InvalidState { length });
        }
        self.segments.pop_back();

        let length = self.segments.len();
        if length >= 2 {
            let prev = self.segments[length - 2].pos;
            let tail = &mut self.segments[length - 1];
            if let Some(direction) = tail_direction(prev, tail.pos) {
                tail.tile = Tile::tail(direction);
            }
        }
        Ok(())
    }

    pub fn check_food_eaten(&self, food: &Food) -> bool {
        self.head().pos == food.pos
    }

    /// Would moving in direction run the head into the body?
    ///
    /// Checked before the move, so the current tail still counts as occupied
    /// even though it is about to be removed.
    pub fn check_self_collision(&self, grid: &Grid, direction: Direction) -> bool {
        let next = grid.neighbor(self.head().pos, direction);
        self.segments.iter().skip(1).any(|seg| seg.pos == next)
    }

    /// Turn the first living segment (head to tail) into bones.
    ///
    /// Returns false once there is nothing left to turn.
    pub fn mark_next_skeleton(&mut self) -> bool {
        match self.segments.iter_mut().find(|seg| !seg.skeleton) {
            Some(seg) => {
                seg.skeleton = true;
                true
            }
            None => false,
        }
    }

    pub fn is_fully_skeletal(&self) -> bool {
        !self.is_empty() && self.segments.iter().all(|seg| seg.skeleton)
    }
}

/// Direction a tail at `tail` points, given the segment `prev` in front of it.
///
/// Neighbours more than one cell apart can only be on opposite edges of a
/// wrapped board, so the naive direction is flipped for them.
fn tail_direction(prev: Position, tail: Position) -> Option<Direction> {
    let dx = (prev.x - tail.x).abs();
    let dy = (prev.y - tail.y).abs();

    let direction = if prev.x < tail.x {
        if dx == 1 { Direction::Left } else { Direction::Right }
    } else if prev.x > tail.x {
        if dx == 1 { Direction::Right } else { Direction::Left }
    } else if prev.y < tail.y {
        if dy == 1 { Direction::Up } else { Direction::Down }
    } else if prev.y > tail.y {
        if dy == 1 { Direction::Down } else { Direction::Up }
    } else {
        return None;
    };
    Some(direction)
}

/// The cupcake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Position,
}

impl Food {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            pos: Position::new(x, y),
        }
    }
}
