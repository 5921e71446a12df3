//! Neon Pong - player paddle versus AI paddle, first to five
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball physics, scoring, match phase)
//! - `renderer`: Drawing contract and 2D canvas backend
//! - `platform`: Browser/headless abstraction (frame clock, pointer, UI panels)
//! - `scores`: Fire-and-forget final score submission
//! - `settings`: Player preferences
//! - `game`: Match orchestration and the per-frame loop

pub mod game;
pub mod platform;
pub mod renderer;
pub mod scores;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// All distances are in playfield units, all speeds in units per millisecond.
pub mod consts {
    /// Fixed logical playfield, independent of the actual display size
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Left edge of the player paddle
    pub const PLAYER_PADDLE_X: f32 = 10.0;
    /// Distance of the AI paddle's left edge from the right wall
    pub const AI_PADDLE_INSET: f32 = 20.0;
    /// AI tracking speed
    pub const AI_PADDLE_SPEED: f32 = 0.4;
    /// AI holds still while the ball is within this distance of its center
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 0.5;
    /// Horizontal speed cap after paddle bounces
    pub const BALL_MAX_SPEED: f32 = 1.5;
    /// Horizontal speed multiplier on each paddle bounce
    pub const PADDLE_SPEEDUP: f32 = 1.05;
    /// Vertical velocity added per unit of offset from paddle center
    pub const SPIN_FACTOR: f32 = 0.002;
    /// Vertical serve factor is drawn from [-SERVE_SPREAD, SERVE_SPREAD]
    pub const SERVE_SPREAD: f32 = 0.5;

    /// First side to this many points wins
    pub const WINNING_SCORE: u32 = 5;

    /// Score submission
    pub const GAME_ID: &str = "neon-pong";
    pub const SCORE_ENDPOINT: &str = "/api/score";
}
