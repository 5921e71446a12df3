//! Per-frame simulation step
//!
//! Advances the player paddle, the AI paddle and then the ball, all by the
//! same elapsed time. Anything the presentation side needs to react to is
//! returned as a `GameEvent` instead of being called back into.

use super::collision::{bounce_off_paddle, scoring_side, wall_collision};
use super::state::{GameState, Side};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off this side's paddle
    PaddleHit(Side),
    /// A point was scored; scores are after the increment
    Scored {
        scorer: Side,
        player_score: u32,
        ai_score: u32,
    },
    /// A side reached the winning score; the match is no longer running
    MatchOver { winner: Side },
}

/// Advance the game state by `dt` milliseconds.
///
/// Does nothing unless the match is running, so scores can never climb past
/// the winning score.
pub fn tick(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    let playfield = state.playfield;
    let ball_y = state.ball.pos.y;
    state.player.update(dt, ball_y, &playfield);
    state.ai.update(dt, ball_y, &playfield);

    let ball = &mut state.ball;
    ball.integrate(dt);

    if wall_collision(ball, &playfield) {
        events.push(GameEvent::WallBounce);
    }
    if bounce_off_paddle(ball, &state.player) {
        events.push(GameEvent::PaddleHit(Side::Player));
    }
    if bounce_off_paddle(ball, &state.ai) {
        events.push(GameEvent::PaddleHit(Side::Ai));
    }

    if let Some(scorer) = scoring_side(ball, &playfield) {
        state.paddle_mut(scorer).score += 1;
        let (player_score, ai_score) = state.score_line();
        events.push(GameEvent::Scored {
            scorer,
            player_score,
            ai_score,
        });

        if let Some(winner) = state.check_win() {
            state.end_match(winner);
            events.push(GameEvent::MatchOver { winner });
        }

        // Serve again even when the match just ended; nothing simulates it
        state.reset_ball();
    }

    events
}
