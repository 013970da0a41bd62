//! The word "SNAKE" drawn with five snakes, shown on the main menu.

use tracing::debug;

use super::{
    action::Direction,
    error::Result,
    grid::Grid,
    state::{Body, Position},
};

/// One letter: where its snake spawns, the full moves (tail follows) that
/// set it up, and the advances (snake grows) that trace the letter
struct Letter {
    origin: (i32, i32),
    moves: &'static str,
    strokes: &'static str,
}

const LETTERS: [Letter; 5] = [
    // S
    Letter {
        origin: (3, 1),
        moves: "LL",
        strokes: "DDRRDDDDLLLURRUULLUUUURRR",
    },
    // N
    Letter {
        origin: (8, 7),
        moves: "UU",
        strokes: "UUUULLDDDDDDLUUUUUUURRRRDDDDDDD",
    },
    // A
    Letter {
        origin: (14, 2),
        moves: "UL",
        strokes: "LDDDDDDLUUUUUUURRRRDDDDDDDLUUUUL",
    },
    // K
    Letter {
        origin: (18, 6),
        moves: "DL",
        strokes: "UUUUUUURDDDDDRRDDRUUULLUURRUULD",
    },
    // E
    Letter {
        origin: (26, 3),
        moves: "LL",
        strokes: "UURRULLLDDDDDDDRRRULLUURR",
    },
];

/// Bottom-right cell of the area the letters cover
const BANNER_CORNER: Position = Position { x: 26, y: 9 };

/// Build the banner snakes on grid; empty when the letters do not fit
pub fn banner(grid: &Grid) -> Result<Vec<Body>> {
    if !grid.contains(BANNER_CORNER) {
        debug!(
            width = grid.width,
            height = grid.height,
            "Board too small for the title banner"
        );
        return Ok(Vec::new());
    }

    LETTERS
        .iter()
        .map(|letter| {
            let (x, y) = letter.origin;
            let mut body = Body::spawn(Position::new(x, y));
            for direction in directions(letter.moves) {
                body.remove_tail()?;
                body.advance(grid, direction);
            }
            for direction in directions(letter.strokes) {
                body.advance(grid, direction);
            }
            Ok(body)
        })
        .collect()
}

fn directions(script: &'static str) -> impl Iterator<Item = Direction> {
    script.chars().filter_map(|c| match c {
        'U' => Some(Direction::Up),
        'D' => Some(Direction::Down),
        'L' => Some(Direction::Left),
        'R' => Some(Direction::Right),
        _ => None,
    })
}
