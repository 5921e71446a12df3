//! Match orchestration and the per-frame loop
//!
//! `Game` owns the simulation state plus the presentation capabilities it is
//! constructed with (surface, UI panels, score sink). It never schedules
//! itself; the caller drives it and stops when `frame` says so:
//!
//! ```ignore
//! game.start();
//! while game.frame(next_frame_timestamp()) {}
//! ```

use log::{debug, info, trace};

use crate::platform::{FrameClock, GameOverSummary, Ui};
use crate::renderer::{Surface, draw_scene};
use crate::scores::ScoreSink;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Side, tick};

pub struct Game<S: Surface, U: Ui> {
    state: GameState,
    clock: FrameClock,
    surface: S,
    ui: U,
    scores: Box<dyn ScoreSink>,
    settings: Settings,
    /// Paddle hits since the last serve
    rally: u32,
}

impl<S: Surface, U: Ui> Game<S, U> {
    /// Build the process-wide game. The start screen is shown; nothing runs
    /// until `start`.
    pub fn new(
        seed: u64,
        surface: S,
        mut ui: U,
        scores: Box<dyn ScoreSink>,
        settings: Settings,
    ) -> Self {
        ui.show_start_screen();
        Self {
            state: GameState::new(seed),
            clock: FrameClock::new(),
            surface,
            ui,
            scores,
            settings,
            rally: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn rally(&self) -> u32 {
        self.rally
    }

    /// Begin a match: hide overlays, serve, zero scores. The next `frame`
    /// is treated as the first one and advances nothing.
    pub fn start(&mut self) {
        self.ui.hide_screens();
        self.state.start();
        self.clock.reset();
        self.rally = 0;
        self.update_score_display();
        info!("Match started (serve seed {})", self.state.seed);
    }

    /// Rematch; same as `start`
    pub fn reset_game(&mut self) {
        self.start();
    }

    /// Advance paddles and ball by `dt` milliseconds and react to what happened
    pub fn update(&mut self, dt: f32) {
        for event in tick(&mut self.state, dt) {
            match event {
                GameEvent::Scored {
                    scorer,
                    player_score,
                    ai_score,
                } => {
                    debug!(
                        "Point to {} after a {}-hit rally: {} - {}",
                        scorer.as_str(),
                        self.rally,
                        player_score,
                        ai_score
                    );
                    self.rally = 0;
                    self.update_score_display();
                }
                GameEvent::MatchOver { winner } => self.game_over(winner),
                GameEvent::PaddleHit(side) => {
                    self.rally += 1;
                    trace!("{} return, rally {}", side.as_str(), self.rally);
                }
                GameEvent::WallBounce => trace!("Wall bounce"),
            }
        }
    }

    pub fn draw(&mut self) {
        draw_scene(&self.state, &mut self.surface);
    }

    /// One frame of the loop. Does nothing while the match is not running.
    /// Returns whether another frame should be scheduled.
    pub fn frame(&mut self, timestamp: f64) -> bool {
        if !self.state.is_running() {
            return false;
        }

        let dt = self.clock.delta(timestamp);
        self.update(dt);
        self.draw();

        self.state.is_running()
    }

    /// End the match, show the result and hand the player's score off to the
    /// score sink without waiting on it.
    pub fn game_over(&mut self, winner: Side) {
        self.state.end_match(winner);

        let (player_score, ai_score) = self.state.score_line();
        let summary = GameOverSummary {
            winner,
            player_score,
            ai_score,
        };
        self.ui.show_game_over(&summary);
        info!(
            "Match over: {} wins {} - {}",
            winner.as_str(),
            player_score,
            ai_score
        );

        if self.settings.submit_scores {
            self.scores.submit(self.settings.submission(player_score));
        }
    }

    pub fn update_score_display(&mut self) {
        let (player, ai) = self.state.score_line();
        self.ui.set_scores(player, ai);
    }

    /// Pointer moved; `y` is already in playfield space. Ignored unless a
    /// match is running.
    pub fn on_pointer_move(&mut self, y: f32) {
        if !self.state.is_running() {
            return;
        }
        let playfield = self.state.playfield;
        let player = &mut self.state.player;
        player.follow_pointer(y);
        player.clamp(&playfield);
    }
}
