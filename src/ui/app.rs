use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, PlacedPiece, Player};

/// Time the falling piece spends on each row.
const ROW_FALL_TIME: Duration = Duration::from_millis(30);

/// Cosmetic falling-piece effect. Created after the move has already been
/// committed to the [`GameState`]; it only changes how the board is drawn.
#[derive(Debug, Clone, Copy)]
pub struct DropAnimation {
    pub column: usize,
    pub target_row: usize,
    pub player: Player,
    started: Instant,
}

impl DropAnimation {
    fn new(placed: PlacedPiece) -> Self {
        DropAnimation {
            column: placed.column,
            target_row: placed.row,
            player: placed.player,
            started: Instant::now(),
        }
    }

    /// Row the falling piece is drawn at after `elapsed`.
    fn row_at(&self, elapsed: Duration) -> usize {
        let fallen = (elapsed.as_millis() / ROW_FALL_TIME.as_millis()) as usize;
        fallen.min(self.target_row)
    }

    /// Row the falling piece is drawn at right now.
    pub fn current_row(&self) -> usize {
        self.row_at(self.started.elapsed())
    }

    fn is_done(&self) -> bool {
        self.started.elapsed() >= ROW_FALL_TIME * (self.target_row as u32 + 1)
    }
}

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    animation: Option<DropAnimation>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game_state = GameState::new(config.board.rows, config.board.cols);
        let selected_column = config.board.cols / 2;
        App {
            config,
            game_state,
            selected_column,
            should_quit: false,
            message: None,
            animation: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Clear finished animations.
    fn tick(&mut self) {
        if self.animation.is_some_and(|anim| anim.is_done()) {
            self.animation = None;
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.grid().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Start over with a fresh state; the old one is discarded wholesale.
    fn new_game(&mut self) {
        self.game_state = GameState::new(self.config.board.rows, self.config.board.cols);
        self.selected_column = self.config.board.cols / 2;
        self.animation = None;
        self.message = Some("New game started!".to_string());
    }

    /// Drop a piece in the selected column. The state transition commits
    /// here; the animation only trails it on screen.
    fn drop_piece(&mut self) {
        match self.game_state.play(self.selected_column) {
            Ok(placed) => {
                if self.config.ui.drop_animation && placed.row > 0 {
                    self.animation = Some(DropAnimation::new(placed));
                }
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Won { player, .. } => format!("{} wins!", player.name()),
                        GameOutcome::Tied => "Tie game!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            self.message.as_deref(),
            self.animation,
        );
    }
}
