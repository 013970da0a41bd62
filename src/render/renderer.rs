use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Phase, Rotation, TileType};
use crate::metrics::GameMetrics;

use super::projection::{Overlay, Scene, SegmentView};

/// Terminal columns used by one board tile
const TILE_COLUMNS: u16 = 2;

const EMPTY_CELL: &str = "  ";
const FOOD_CELL: &str = "◆ ";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Score bar
        let stats = self.render_stats(scene, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = board_rect(chunks[1], scene.width, scene.height);
        let board = self.render_board(scene);
        frame.render_widget(board, board_area);

        if let Some((area, text)) = self.render_overlay(board_area, scene) {
            frame.render_widget(Clear, area);
            frame.render_widget(text, area);
        }

        // Render footer with controls
        let controls = self.render_controls(scene.phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, scene: &Scene) -> Paragraph<'_> {
        let width = scene.width.max(0) as usize;
        let height = scene.height.max(0) as usize;
        let mut cells = vec![vec![Span::raw(EMPTY_CELL); width]; height];

        let mut put = |x: i32, y: i32, span: Span<'static>| {
            if let Some(cell) = cells
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = span;
            }
        };

        if let Some(food) = scene.food {
            put(
                food.x,
                food.y,
                Span::styled(FOOD_CELL, dim(Style::default().fg(Color::Magenta), scene.dimmed)),
            );
        }

        for letter in &scene.banner {
            for seg in letter.iter().rev() {
                put(
                    seg.x,
                    seg.y,
                    Span::styled(glyph(seg), Style::default().fg(Color::LightBlue)),
                );
            }
        }

        // Tail first so the head wins where segments overlap
        let menu = scene.phase == Phase::MainMenu;
        for seg in scene.snake.iter().rev() {
            put(
                seg.x,
                seg.y,
                Span::styled(glyph(seg), dim(segment_style(seg), scene.dimmed || menu)),
            );
        }

        let lines: Vec<Line> = cells.into_iter().map(Line::from).collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, scene: &Scene, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Calories: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                scene.calories().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().style(Style::default().bg(Color::Rgb(34, 32, 52))))
    }

    fn render_overlay(&self, board: Rect, scene: &Scene) -> Option<(Rect, Paragraph<'_>)> {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let (lines, border) = match scene.overlay {
            Overlay::None => return None,
            Overlay::Title => (
                vec![
                    Line::from(Span::styled("SPACE: Start Game", bold(Color::Green))),
                    Line::from("UP/DOWN/LEFT/RIGHT: Change direction of snake"),
                    Line::from("Q: Quit"),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Eat the cupcakes, but not yourself!",
                        Style::default().fg(Color::Magenta),
                    )),
                ],
                Color::LightBlue,
            ),
            Overlay::Countdown(n) => (
                vec![Line::from(Span::styled(n.to_string(), bold(Color::Yellow)))],
                Color::Yellow,
            ),
            Overlay::Go => (
                vec![Line::from(Span::styled("GO!", bold(Color::Green)))],
                Color::Green,
            ),
            Overlay::GameOver => (
                vec![
                    Line::from(Span::styled("GAME OVER!", bold(Color::Red))),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("SPACE", bold(Color::Green)),
                        Span::raw(": New Game"),
                    ]),
                    Line::from(vec![
                        Span::styled("ESC", bold(Color::Cyan)),
                        Span::raw(": Main Menu"),
                    ]),
                    Line::from(vec![
                        Span::styled("Q", bold(Color::Red)),
                        Span::raw(": Quit"),
                    ]),
                ],
                Color::Red,
            ),
        };

        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;
        let area = if scene.overlay == Overlay::Title {
            // Below the title letters
            bottom_rect(board, width, height)
        } else {
            centered_rect(board, width, height)
        };

        let text = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        Some((area, text))
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let line = match phase {
            Phase::MainMenu => Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::GameOver => Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::raw(" new game | "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-column picture of a tile. Unrotated sprites face up; the unrotated
/// bend joins left and down.
fn glyph(seg: &SegmentView) -> &'static str {
    let vertical = matches!(seg.rotation, Rotation::None | Rotation::Half);

    match seg.kind {
        TileType::Head => match seg.rotation {
            Rotation::None => "▲ ",
            Rotation::Cw90 => "▶ ",
            Rotation::Half => "▼ ",
            Rotation::Ccw90 => "◀ ",
        },
        TileType::Body if vertical => "║ ",
        TileType::Body => "══",
        TileType::Bend => match seg.rotation {
            Rotation::None => "╗ ",
            Rotation::Half => "╚═",
            Rotation::Ccw90 => "╔═",
            Rotation::Cw90 => "╝ ",
        },
        TileType::Tail if vertical => "│ ",
        TileType::Tail => "──",
    }
}

fn segment_style(seg: &SegmentView) -> Style {
    if seg.skeleton {
        return Style::default().fg(Color::Gray);
    }
    match seg.kind {
        TileType::Head if seg.tongue_out => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        TileType::Head => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Green),
    }
}

fn dim(style: Style, dimmed: bool) -> Style {
    if dimmed {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Board with its border, centered in area
fn board_rect(area: Rect, width: i32, height: i32) -> Rect {
    let tiles = |n: i32| u16::try_from(n.max(0)).unwrap_or(u16::MAX);
    let w = tiles(width)
        .saturating_mul(TILE_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let h = tiles(height).saturating_add(2).min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn bottom_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + area.height.saturating_sub(h + 1),
        w,
        h,
    )
}
