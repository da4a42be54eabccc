//! App tests - menu navigation and mode switching

use tetro::core::{App, SessionConfig};
use tetro::types::{AppMode, Control, InputState, MenuItem, TileColor, TICK_MS};

fn tap(app: &mut App, control: Control) {
    let mut input = InputState::new();
    input.press(control);
    app.update(TICK_MS, &input);
}

fn app() -> App {
    App::new(SessionConfig {
        seed: 5,
        speed_percent: 100,
    })
}

#[test]
fn test_starts_in_menu_on_new_game() {
    let app = app();
    assert_eq!(app.mode(), AppMode::Menu);
    assert_eq!(app.menu_item(), MenuItem::NewGame);
    assert!(!app.exit_requested());
}

#[test]
fn test_new_game_then_back_to_menu() {
    let mut app = app();
    tap(&mut app, Control::Confirm);
    assert_eq!(app.mode(), AppMode::Game);

    tap(&mut app, Control::Cancel);
    assert_eq!(app.mode(), AppMode::Menu);
    assert!(!app.exit_requested());
}

#[test]
fn test_menu_to_game_resets_score_and_piece() {
    let mut app = app();
    tap(&mut app, Control::Confirm);

    // Play long enough to have a piece in flight.
    let mut input = InputState::new();
    input.press(Control::SoftDrop);
    for _ in 0..200 {
        app.update(TICK_MS, &input);
        input.end_tick();
    }
    assert!(app.session().active().is_some());
    app.session_mut().field_mut().set(9, 23, Some(TileColor::Yellow));

    tap(&mut app, Control::Cancel);
    tap(&mut app, Control::Confirm);

    assert_eq!(app.mode(), AppMode::Game);
    assert_eq!(app.session().score(), 0);
    assert!(app.session().active().is_none());
    assert!(!app.session().field().is_occupied(9, 23));
}

#[test]
fn test_quit_entry_requests_exit() {
    let mut app = app();
    tap(&mut app, Control::SoftDrop);
    assert_eq!(app.menu_item(), MenuItem::Quit);
    tap(&mut app, Control::Confirm);
    assert!(app.exit_requested());
}

#[test]
fn test_external_quit_signal() {
    let mut app = app();
    tap(&mut app, Control::Confirm);
    app.request_exit();
    assert!(app.exit_requested());
    assert_eq!(app.mode(), AppMode::Game);
}

#[test]
fn test_game_input_does_not_move_menu_cursor() {
    let mut app = app();
    tap(&mut app, Control::Confirm);
    tap(&mut app, Control::SoftDrop);
    tap(&mut app, Control::Cancel);
    assert_eq!(app.menu_item(), MenuItem::NewGame);
}

#[test]
#[should_panic(expected = "current mode")]
fn test_entering_current_mode_is_fatal() {
    let mut app = app();
    app.set_mode(AppMode::Game);
    app.set_mode(AppMode::Game);
}

#[test]
fn test_snapshot_preview_does_not_consume() {
    let mut app = app();
    tap(&mut app, Control::Confirm);

    let first = app.snapshot().next;
    let second = app.snapshot().next;
    assert!(first.is_some());
    assert_eq!(first, second);

    let menu = {
        tap(&mut app, Control::Cancel);
        app.snapshot()
    };
    assert_eq!(menu.mode, AppMode::Menu);
    assert!(menu.next.is_none());
}
