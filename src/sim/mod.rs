//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only arrives as a delta passed into `tick`
//! - Seeded RNG only (owned by `GameState`)
//! - No rendering, DOM or network dependencies; outcomes leave as `GameEvent`s

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_paddle, paddle_overlap, scoring_side, wall_collision};
pub use state::{Ball, GameState, MatchPhase, Paddle, Playfield, Side};
pub use tick::{GameEvent, tick};
