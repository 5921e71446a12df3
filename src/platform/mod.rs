//! Platform abstraction layer
//!
//! Handles browser/headless differences for:
//! - Time (frame timestamps to deltas)
//! - Input (pointer position to playfield space)
//! - UI panels (start/game-over screens, score readouts)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessUi;
#[cfg(target_arch = "wasm32")]
pub use web::DomUi;

use crate::sim::Side;

/// Turns monotonically increasing frame timestamps (ms) into deltas.
///
/// The first timestamp after construction or `reset` yields a zero delta, so a
/// fresh match never starts with a jump the size of the page's uptime.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next delta will be 0
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Milliseconds since the previous timestamp, never negative
    pub fn delta(&mut self, timestamp: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (timestamp - last) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp);
        dt.max(0.0)
    }
}

/// Map a pointer's client y into playfield space given the element's on-screen
/// top and height. `None` while the element has no height (hidden, collapsed).
pub fn pointer_to_playfield_y(
    client_y: f64,
    rect_top: f64,
    rect_height: f64,
    playfield_height: f32,
) -> Option<f32> {
    if rect_height <= 0.0 {
        return None;
    }
    let scale = playfield_height as f64 / rect_height;
    Some(((client_y - rect_top) * scale) as f32)
}

/// What the game-over panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub winner: Side,
    pub player_score: u32,
    pub ai_score: u32,
}

impl GameOverSummary {
    pub fn message(&self) -> &'static str {
        self.winner.outcome_message()
    }

    pub fn color(&self) -> &'static str {
        self.winner.accent_color()
    }

    pub fn final_score(&self) -> String {
        format!("Final Score: {} - {}", self.player_score, self.ai_score)
    }
}

/// Start/game-over panels and score readouts
pub trait Ui {
    fn show_start_screen(&mut self);
    /// Hide both the start and the game-over panels
    fn hide_screens(&mut self);
    fn show_game_over(&mut self, summary: &GameOverSummary);
    fn set_scores(&mut self, player: u32, ai: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(123456.0), 0.0);
        assert_eq!(clock.delta(123472.0), 16.0);
    }

    #[test]
    fn test_reset_zeroes_next_delta() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        clock.delta(1016.0);
        clock.reset();
        assert_eq!(clock.delta(5000.0), 0.0);
    }

    #[test]
    fn test_long_frames_pass_through() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        assert_eq!(clock.delta(10_000.0), 10_000.0);
        // Timestamps going backwards never produce negative time
        assert_eq!(clock.delta(9_000.0), 0.0);
    }

    #[test]
    fn test_pointer_mapping_scales() {
        // Canvas shown at half size, 50px from the top of the viewport
        assert_eq!(pointer_to_playfield_y(200.0, 50.0, 300.0, 600.0), Some(300.0));
        assert_eq!(pointer_to_playfield_y(50.0, 50.0, 300.0, 600.0), Some(0.0));
        assert_eq!(pointer_to_playfield_y(10.0, 0.0, 0.0, 600.0), None);
    }

    #[test]
    fn test_game_over_summary_text() {
        let summary = GameOverSummary {
            winner: Side::Ai,
            player_score: 0,
            ai_score: 5,
        };
        assert_eq!(summary.message(), "YOU LOSE");
        assert_eq!(summary.color(), "#bc13fe");
        assert_eq!(summary.final_score(), "Final Score: 0 - 5");
    }
}
