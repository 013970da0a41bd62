use tile_snake::game::{Direction, GameConfig, InputEvent, Phase, Position, Session, Signal};
use tile_snake::render::{Overlay, Scene};

fn tick(session: &mut Session, n: usize) {
    for _ in 0..n {
        assert_eq!(session.update(&[]).unwrap(), Signal::Continue);
    }
}

/// Press start on the menu and sit through the countdown
fn start_game(session: &mut Session) {
    session.update(&[InputEvent::Start]).unwrap();
    assert_eq!(session.phase(), Phase::Countdown);
    tick(session, 240);
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn menu_to_playing_and_quit() {
    let mut session = Session::with_seed(GameConfig::default(), 42).unwrap();
    assert_eq!(Scene::project(&session).overlay, Overlay::Title);

    start_game(&mut session);
    let scene = Scene::project(&session);
    assert_eq!(scene.overlay, Overlay::None);
    assert_eq!(scene.snake.len(), 3);

    // Reversal and same-direction requests are ignored
    session.update(&[InputEvent::Turn(Direction::Down)]).unwrap();
    session.update(&[InputEvent::Turn(Direction::Up)]).unwrap();
    assert_eq!(session.direction(), Direction::Up);

    let ahead = Position::new(13, 9);
    let ate = session.food().pos == ahead;
    tick(&mut session, 28);
    assert_eq!(session.body().head().pos, ahead);
    assert_eq!(session.score(), u32::from(ate));
    assert_eq!(session.ticks_per_move(), 40 - u32::from(ate));

    session.update(&[InputEvent::Turn(Direction::Left)]).unwrap();
    assert_eq!(session.direction(), Direction::Left);

    assert_eq!(session.update(&[InputEvent::Quit]).unwrap(), Signal::Quit);
}

#[test]
fn moves_wrap_around_the_board() {
    let mut session = Session::with_seed(GameConfig::default(), 7).unwrap();
    start_game(&mut session);

    // Head starts at row 10 of 20; keep going up until it reappears at the bottom
    let mut wrapped = false;
    for _ in 0..2_000 {
        session.update(&[]).unwrap();
        if session.body().head().pos.y == 19 {
            wrapped = true;
            break;
        }
    }

    assert!(wrapped);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.body().head().pos.x, 13);
}

#[test]
fn filled_board_ends_the_game_and_restarts() {
    // A one-column board: the snake can only run up and must eat every cupcake
    let mut session = Session::with_seed(GameConfig::new(1, 5), 3).unwrap();
    start_game(&mut session);

    let mut ticks = 0;
    while session.phase() == Phase::Playing {
        session.update(&[]).unwrap();
        ticks += 1;
        assert!(ticks < 5_000, "snake never filled the board");
    }

    assert_eq!(session.phase(), Phase::Dying);
    assert_eq!(session.body().len(), 5);
    assert_eq!(session.score(), 3);

    // One bone every two ticks
    tick(&mut session, 10);
    assert_eq!(session.phase(), Phase::GameOver);

    let scene = Scene::project(&session);
    assert!(scene.dimmed);
    assert_eq!(scene.overlay, Overlay::GameOver);
    assert_eq!(scene.calories(), 600);

    // Waits for input
    tick(&mut session, 50);
    assert_eq!(session.phase(), Phase::GameOver);

    session.update(&[InputEvent::Start]).unwrap();
    assert_eq!(session.phase(), Phase::Countdown);
    assert_eq!(session.score(), 0);
    assert_eq!(session.body().len(), 3);
}

#[test]
fn game_over_back_to_menu() {
    let mut session = Session::with_seed(GameConfig::new(1, 5), 8).unwrap();
    start_game(&mut session);

    while session.phase() != Phase::GameOver {
        session.update(&[]).unwrap();
    }

    session.update(&[InputEvent::ToMenu]).unwrap();
    assert_eq!(session.phase(), Phase::MainMenu);
    assert_eq!(session.score(), 0);
    assert_eq!(session.ticks_per_move(), 5);
    assert!(Scene::project(&session).food.is_none());
}
