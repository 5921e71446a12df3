//! In-memory UI for native runs and tests

use log::info;

use super::{GameOverSummary, Ui};

/// Keeps the UI state in fields instead of on a page
#[derive(Debug, Clone, Default)]
pub struct HeadlessUi {
    pub start_visible: bool,
    pub game_over: Option<GameOverSummary>,
    pub scores: (u32, u32),
    /// How many times the score readout was refreshed
    pub score_updates: u32,
}

impl Ui for HeadlessUi {
    fn show_start_screen(&mut self) {
        self.start_visible = true;
    }

    fn hide_screens(&mut self) {
        self.start_visible = false;
        self.game_over = None;
    }

    fn show_game_over(&mut self, summary: &GameOverSummary) {
        info!("{} | {}", summary.message(), summary.final_score());
        self.game_over = Some(*summary);
    }

    fn set_scores(&mut self, player: u32, ai: u32) {
        self.scores = (player, ai);
        self.score_updates += 1;
    }
}
