//! Sprite selection for body segments.
//!
//! Every segment is drawn with one of four sprites, rotated about the tile
//! center. The unrotated sprites face up; the unrotated bend joins the left
//! and bottom edges of its cell.

use super::action::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Head,
    Body,
    Bend,
    Tail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    None,
    Cw90,
    Half,
    Ccw90,
}

impl Rotation {
    /// Rotation that turns an upward-facing sprite toward direction
    pub fn facing(direction: Direction) -> Self {
        match direction {
            Direction::Up => Rotation::None,
            Direction::Down => Rotation::Half,
            Direction::Left => Rotation::Ccw90,
            Direction::Right => Rotation::Cw90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileType,
    pub rotation: Rotation,
}

impl Tile {
    pub const BEND_LD: Tile = Tile::new(TileType::Bend, Rotation::None);
    pub const BEND_RU: Tile = Tile::new(TileType::Bend, Rotation::Half);
    pub const BEND_RD: Tile = Tile::new(TileType::Bend, Rotation::Ccw90);
    pub const BEND_LU: Tile = Tile::new(TileType::Bend, Rotation::Cw90);

    pub const fn new(kind: TileType, rotation: Rotation) -> Self {
        Self { kind, rotation }
    }

    pub fn head(direction: Direction) -> Self {
        Self::new(TileType::Head, Rotation::facing(direction))
    }

    pub fn body(direction: Direction) -> Self {
        Self::new(TileType::Body, Rotation::facing(direction))
    }

    pub fn tail(direction: Direction) -> Self {
        Self::new(TileType::Tail, Rotation::facing(direction))
    }

    /// Tile for a head segment that is being overtaken by a new head.
    ///
    /// `facing` is the direction the retiring segment was travelling, `turn`
    /// the direction the new head moves in. A reversal cannot happen during
    /// play and falls back to a straight piece.
    pub fn joint(facing: Direction, turn: Direction) -> Self {
        use Direction::*;

        match (facing, turn) {
            (Up, Left) | (Right, Down) => Tile::BEND_LD,
            (Up, Right) | (Left, Down) => Tile::BEND_RD,
            (Down, Left) | (Right, Up) => Tile::BEND_LU,
            (Down, Right) | (Left, Up) => Tile::BEND_RU,
            _ => Tile::body(turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_joints() {
        for dir in Direction::ALL {
            assert_eq!(Tile::joint(dir, dir), Tile::body(dir));
        }
    }

    #[test]
    fn test_bend_joints() {
        use Direction::*;

        assert_eq!(Tile::joint(Up, Left), Tile::BEND_LD);
        assert_eq!(Tile::joint(Up, Right), Tile::BEND_RD);
        assert_eq!(Tile::joint(Down, Left), Tile::BEND_LU);
        assert_eq!(Tile::joint(Down, Right), Tile::BEND_RU);
        assert_eq!(Tile::joint(Left, Up), Tile::BEND_RU);
        assert_eq!(Tile::joint(Left, Down), Tile::BEND_RD);
        assert_eq!(Tile::joint(Right, Up), Tile::BEND_LU);
        assert_eq!(Tile::joint(Right, Down), Tile::BEND_LD);
    }

    #[test]
    fn test_every_turn_is_a_bend() {
        for facing in Direction::ALL {
            for turn in facing.perpendiculars() {
                assert_eq!(Tile::joint(facing, turn).kind, TileType::Bend);
            }
        }
    }

    #[test]
    fn test_reversal_is_straight() {
        assert_eq!(
            Tile::joint(Direction::Up, Direction::Down),
            Tile::body(Direction::Down)
        );
    }

    #[test]
    fn test_rotations() {
        assert_eq!(Tile::head(Direction::Up).rotation, Rotation::None);
        assert_eq!(Tile::head(Direction::Right).rotation, Rotation::Cw90);
        assert_eq!(Tile::head(Direction::Down).rotation, Rotation::Half);
        assert_eq!(Tile::head(Direction::Left).rotation, Rotation::Ccw90);
    }
}
