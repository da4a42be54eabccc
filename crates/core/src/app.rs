//! App module - top-level mode switch between the menu and a running session

use crate::session::{Session, SessionConfig, TickOutcome};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
use crate::types::{
    AppMode, Control, InputState, MenuItem, FIELD_WIDTH, HIDDEN_ROWS, VIEWABLE_HEIGHT,
};

#[derive(Debug, Clone)]
pub struct App {
    mode: AppMode,
    menu_item: MenuItem,
    session: Session,
    exit_requested: bool,
}

impl App {
    /// Start in the menu with the first entry selected
    pub fn new(config: SessionConfig) -> Self {
        Self {
            mode: AppMode::Menu,
            menu_item: MenuItem::NewGame,
            session: Session::new(config),
            exit_requested: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn menu_item(&self) -> MenuItem {
        self.menu_item
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// External quit signal (window close, Ctrl-C)
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Switch modes. Entering the game resets the session.
    ///
    /// # Panics
    ///
    /// Panics if `mode` is already the current mode.
    pub fn set_mode(&mut self, mode: AppMode) {
        assert!(
            mode != self.mode,
            "mode transition to the current mode: {:?}",
            mode
        );

        if mode == AppMode::Game {
            self.session.reset();
        }
        self.mode = mode;
    }

    /// Advance one tick in the current mode
    pub fn update(&mut self, elapsed_ms: u32, input: &InputState) {
        match self.mode {
            AppMode::Menu => self.update_menu(input),
            AppMode::Game => {
                if self.session.update(elapsed_ms, input) == TickOutcome::ExitToMenu {
                    self.set_mode(AppMode::Menu);
                }
            }
        }
    }

    fn update_menu(&mut self, input: &InputState) {
        if input.is_pressed(Control::Cancel) {
            self.exit_requested = true;
            return;
        }

        if input.is_pressed(Control::Confirm) {
            match self.menu_item {
                MenuItem::NewGame => self.set_mode(AppMode::Game),
                MenuItem::Quit => self.exit_requested = true,
            }
            return;
        }

        if input.is_pressed(Control::SoftDrop) {
            self.menu_item = self.menu_item.next();
        } else if input.is_pressed(Control::Rotate) {
            self.menu_item = self.menu_item.prev();
        }
    }

    /// Fill a caller-owned snapshot. The preview may refill a bag but never consumes.
    pub fn snapshot_into(&mut self, out: &mut GameSnapshot) {
        out.mode = self.mode;
        out.menu_item = self.menu_item;
        out.score = self.session.score();
        out.lines = self.session.lines();
        out.lost = self.session.is_lost();

        let field = self.session.field();
        for (y, row) in out.field.iter_mut().enumerate().take(VIEWABLE_HEIGHT) {
            row.copy_from_slice(&field.row(y + HIDDEN_ROWS)[..FIELD_WIDTH]);
        }

        out.active = self.session.active().map(ActiveSnapshot::from);
        out.next = match self.mode {
            AppMode::Game => Some(PreviewSnapshot::from(self.session.peek_next())),
            AppMode::Menu => None,
        };
    }

    pub fn snapshot(&mut self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TileColor, TICK_MS};

    fn pressed(control: Control) -> InputState {
        let mut input = InputState::new();
        input.press(control);
        input
    }

    #[test]
    fn menu_navigation_is_clamped() {
        let mut app = App::default();
        app.update(TICK_MS, &pressed(Control::Rotate));
        assert_eq!(app.menu_item(), MenuItem::NewGame);

        app.update(TICK_MS, &pressed(Control::SoftDrop));
        assert_eq!(app.menu_item(), MenuItem::Quit);
        app.update(TICK_MS, &pressed(Control::SoftDrop));
        assert_eq!(app.menu_item(), MenuItem::Quit);

        app.update(TICK_MS, &pressed(Control::Rotate));
        assert_eq!(app.menu_item(), MenuItem::NewGame);
    }

    #[test]
    fn confirm_on_quit_requests_exit() {
        let mut app = App::default();
        app.update(TICK_MS, &pressed(Control::SoftDrop));
        app.update(TICK_MS, &pressed(Control::Confirm));
        assert!(app.exit_requested());
        assert_eq!(app.mode(), AppMode::Menu);
    }

    #[test]
    fn cancel_in_menu_requests_exit() {
        let mut app = App::default();
        app.update(TICK_MS, &pressed(Control::Cancel));
        assert!(app.exit_requested());
    }

    #[test]
    fn entering_game_resets_session() {
        let mut app = App::default();
        app.session_mut().field_mut().set(0, 23, Some(TileColor::Red));
        app.session_mut().spawn_next();

        app.update(TICK_MS, &pressed(Control::Confirm));
        assert_eq!(app.mode(), AppMode::Game);
        assert!(app.session().active().is_none());
        assert_eq!(app.session().score(), 0);
        assert!(!app.session().field().is_occupied(0, 23));
    }

    #[test]
    fn cancel_in_game_returns_to_menu() {
        let mut app = App::default();
        app.set_mode(AppMode::Game);
        app.update(TICK_MS, &pressed(Control::Cancel));
        assert_eq!(app.mode(), AppMode::Menu);
        assert!(!app.exit_requested());
    }

    #[test]
    #[should_panic(expected = "current mode")]
    fn same_mode_transition_panics() {
        let mut app = App::default();
        app.set_mode(AppMode::Menu);
    }

    #[test]
    fn snapshot_copies_viewable_rows_only() {
        let mut app = App::default();
        app.set_mode(AppMode::Game);
        app.session_mut().field_mut().set(2, 0, Some(TileColor::Red));
        app.session_mut().field_mut().set(2, HIDDEN_ROWS as i32, Some(TileColor::Blue));

        let snap = app.snapshot();
        assert_eq!(snap.field[0][2], Some(TileColor::Blue));
        assert!(snap.next.is_some());
        assert_eq!(snap.mode, AppMode::Game);
    }
}
