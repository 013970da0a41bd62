use rand::Rng;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    #[cfg(test)]
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns true if other lies on the other axis (a 90-degree turn)
    pub fn is_perpendicular(&self, other: Direction) -> bool {
        self.is_vertical() != other.is_vertical()
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The two directions at right angles to this one
    pub fn perpendiculars(&self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Wandering heading for the decorative menu snake: keep going straight
    /// half of the time, otherwise turn left or right with equal odds.
    pub fn wander<R: Rng + ?Sized>(self, rng: &mut R) -> Direction {
        if rng.gen_bool(0.5) {
            return self;
        }
        let [a, b] = self.perpendiculars();
        if rng.gen_bool(0.5) { a } else { b }
    }
}

/// Discrete input fed to a session once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Request a change of heading (validated by the session)
    Turn(Direction),
    /// Leave the menu or start a new game from the game-over screen
    Start,
    /// Back to the main menu from the game-over screen
    ToMenu,
    /// Stop the run loop
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_perpendicular_directions() {
        assert!(Direction::Up.is_perpendicular(Direction::Left));
        assert!(Direction::Up.is_perpendicular(Direction::Right));
        assert!(!Direction::Up.is_perpendicular(Direction::Up));
        assert!(!Direction::Up.is_perpendicular(Direction::Down));
        assert!(Direction::Left.is_perpendicular(Direction::Down));
        assert!(!Direction::Left.is_perpendicular(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_wander_never_reverses() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut turned = false;
        for _ in 0..500 {
            for dir in Direction::ALL {
                let next = dir.wander(&mut rng);
                assert!(!dir.is_opposite(next));
                turned |= next != dir;
            }
        }
        assert!(turned);
    }

    #[test]
    fn test_wander_reaches_both_sides() {
        let mut rng = StdRng::seed_from_u64(11);
        let picks: Vec<_> = (0..200).map(|_| Direction::Up.wander(&mut rng)).collect();
        assert!(picks.contains(&Direction::Left));
        assert!(picks.contains(&Direction::Right));
        assert!(picks.contains(&Direction::Up));
    }
}
