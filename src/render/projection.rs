use crate::game::{Body, Phase, Position, Rotation, Session, TileType};

/// Calories shown per point of score
pub const CALORIES_PER_POINT: u32 = 200;

/// One segment as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentView {
    pub x: i32,
    pub y: i32,
    pub kind: TileType,
    pub rotation: Rotation,
    pub skeleton: bool,
    pub tongue_out: bool,
}

/// Text drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Title,
    Countdown(i32),
    Go,
    GameOver,
    None,
}

/// Snapshot of everything a frame shows
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub phase: Phase,
    /// Board size in tiles
    pub width: i32,
    pub height: i32,
    /// Player (or menu) snake, head first
    pub snake: Vec<SegmentView>,
    /// Title letters, only on the main menu
    pub banner: Vec<Vec<SegmentView>>,
    pub food: Option<Position>,
    /// Fade everything out behind the game-over text
    pub dimmed: bool,
    pub score: u32,
    pub overlay: Overlay,
}

impl Scene {
    pub fn project(session: &Session) -> Self {
        let phase = session.phase();

        let banner = if phase == Phase::MainMenu {
            session
                .banner()
                .iter()
                .map(|body| project_body(body, false))
                .collect()
        } else {
            Vec::new()
        };

        let overlay = match phase {
            Phase::MainMenu => Overlay::Title,
            Phase::Countdown if session.countdown() > 0 => Overlay::Countdown(session.countdown()),
            Phase::Countdown => Overlay::Go,
            Phase::GameOver => Overlay::GameOver,
            Phase::Playing | Phase::Dying => Overlay::None,
        };

        let grid = session.grid();

        Self {
            phase,
            width: grid.width,
            height: grid.height,
            snake: project_body(session.body(), session.tongue_out()),
            banner,
            food: (phase != Phase::MainMenu).then_some(session.food().pos),
            dimmed: phase == Phase::GameOver,
            score: session.score(),
            overlay,
        }
    }

    pub fn calories(&self) -> u32 {
        self.score * CALORIES_PER_POINT
    }
}

fn project_body(body: &Body, tongue_out: bool) -> Vec<SegmentView> {
    body.segments()
        .enumerate()
        .map(|(i, seg)| SegmentView {
            x: seg.pos.x,
            y: seg.pos.y,
            kind: seg.tile.kind,
            rotation: seg.tile.rotation,
            skeleton: seg.skeleton,
            tongue_out: i == 0 && tongue_out && !seg.skeleton,
        })
        .collect()
}
