//! Game state and core simulation types
//!
//! One `GameState` lives for the whole process and is reset in place between
//! matches. Paddles and the ball never hold references back to it; whatever
//! they need (playfield, ball position) is passed into their update calls.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, driven by the pointer
    Player,
    /// Right paddle, driven by the tracking heuristic
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }

    /// Headline shown on the game-over screen when this side wins
    pub fn outcome_message(&self) -> &'static str {
        match self {
            Side::Player => "YOU WIN",
            Side::Ai => "YOU LOSE",
        }
    }

    /// Neon accent for this side (paddle fill, game-over headline)
    pub fn accent_color(&self) -> &'static str {
        match self {
            Side::Player => "#00f3ff",
            Side::Ai => "#bc13fe",
        }
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Before the first start, start screen visible
    Ready,
    /// Frames are being simulated
    Running,
    /// Someone reached the winning score
    Finished { winner: Side },
}

impl MatchPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, MatchPhase::Running)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchPhase::Finished { winner } => Some(*winner),
            _ => None,
        }
    }
}

/// Fixed logical coordinate space; scaling to the display is the renderer's job
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. `pos` is the top-left corner; x never changes after construction.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    /// AI tracking speed (units/ms); unused for the player paddle
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, playfield: &Playfield) -> Self {
        let x = match side {
            Side::Player => PLAYER_PADDLE_X,
            Side::Ai => playfield.width - AI_PADDLE_INSET,
        };
        Self {
            side,
            pos: Vec2::new(x, (playfield.height - PADDLE_HEIGHT) / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: AI_PADDLE_SPEED,
            score: 0,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Keep the paddle fully inside the playfield
    pub fn clamp(&mut self, playfield: &Playfield) {
        self.pos.y = self.pos.y.clamp(0.0, playfield.height - self.size.y);
    }

    /// Center the paddle on a pointer position already mapped into playfield space
    pub fn follow_pointer(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Advance one frame. Only the AI paddle moves here; the player paddle is
    /// positioned by `follow_pointer` and merely clamped.
    pub fn update(&mut self, dt: f32, ball_y: f32, playfield: &Playfield) {
        self.clamp(playfield);

        if self.side == Side::Ai {
            let center = self.center_y();
            if center < ball_y - AI_DEAD_ZONE {
                self.pos.y += self.speed * dt;
            } else if center > ball_y + AI_DEAD_ZONE {
                self.pos.y -= self.speed * dt;
            }
            self.clamp(playfield);
        }
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Per-axis speed on serve
    pub base_speed: f32,
    /// Horizontal speed cap after paddle bounces
    pub max_speed: f32,
}

impl Ball {
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            pos: playfield.center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            max_speed: BALL_MAX_SPEED,
        }
    }

    /// Serve from the center with a random direction: left or right with equal
    /// odds, and a mild random launch angle.
    pub fn reset<R: Rng>(&mut self, playfield: &Playfield, rng: &mut R) {
        let dir_x = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let dir_y = rng.random_range(-SERVE_SPREAD..=SERVE_SPREAD);
        self.serve(playfield, dir_x, dir_y);
    }

    /// Serve from the center with explicit direction factors
    pub fn serve(&mut self, playfield: &Playfield, dir_x: f32, dir_y: f32) {
        self.pos = playfield.center();
        self.vel = Vec2::new(dir_x, dir_y) * self.base_speed;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Serve RNG seed
    pub seed: u64,
    pub playfield: Playfield,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub phase: MatchPhase,
    pub winning_score: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a state in the `Ready` phase with the given serve seed
    pub fn new(seed: u64) -> Self {
        let playfield = Playfield::default();
        let mut state = Self {
            seed,
            playfield,
            player: Paddle::new(Side::Player, &playfield),
            ai: Paddle::new(Side::Ai, &playfield),
            ball: Ball::new(&playfield),
            phase: MatchPhase::Ready,
            winning_score: WINNING_SCORE,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    /// Begin (or restart) a match in place: fresh serve, scores zeroed
    pub fn start(&mut self) {
        self.phase = MatchPhase::Running;
        self.reset_ball();
        self.player.score = 0;
        self.ai.score = 0;
    }

    /// Serve a new ball
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.playfield, &mut self.rng);
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// (player, ai)
    pub fn score_line(&self) -> (u32, u32) {
        (self.player.score, self.ai.score)
    }

    /// The side that has reached the winning score, player checked first
    pub fn check_win(&self) -> Option<Side> {
        if self.player.score >= self.winning_score {
            Some(Side::Player)
        } else if self.ai.score >= self.winning_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn end_match(&mut self, winner: Side) {
        self.phase = MatchPhase::Finished { winner };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered() {
        let state = GameState::new(1);
        assert_eq!(state.player.pos, Vec2::new(10.0, 250.0));
        assert_eq!(state.ai.pos, Vec2::new(780.0, 250.0));
        assert_eq!(state.phase, MatchPhase::Ready);
    }

    #[test]
    fn test_paddle_clamp() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(Side::Player, &field);

        paddle.pos.y = -40.0;
        paddle.update(16.0, 300.0, &field);
        assert_eq!(paddle.pos.y, 0.0);

        paddle.pos.y = 580.0;
        paddle.update(16.0, 300.0, &field);
        assert_eq!(paddle.pos.y, 500.0);
    }

    #[test]
    fn test_player_paddle_ignores_ball() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(Side::Player, &field);
        paddle.update(16.0, 0.0, &field);
        assert_eq!(paddle.pos.y, 250.0);
    }

    #[test]
    fn test_follow_pointer_centers_paddle() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(Side::Player, &field);
        paddle.follow_pointer(120.0);
        assert_eq!(paddle.pos.y, 70.0);
        assert_eq!(paddle.center_y(), 120.0);
    }

    #[test]
    fn test_ai_tracks_ball() {
        let field = Playfield::default();
        let mut ai = Paddle::new(Side::Ai, &field);

        // Ball well below center: move down at speed * dt
        ai.update(10.0, 450.0, &field);
        assert!((ai.pos.y - 254.0).abs() < 1e-4);

        // Ball well above center: move up
        let mut ai = Paddle::new(Side::Ai, &field);
        ai.update(10.0, 100.0, &field);
        assert!((ai.pos.y - 246.0).abs() < 1e-4);
    }

    #[test]
    fn test_ai_dead_zone() {
        let field = Playfield::default();
        let mut ai = Paddle::new(Side::Ai, &field);
        // Center is 300; anything within +-10 holds position
        for ball_y in [290.0, 295.0, 300.0, 305.0, 310.0] {
            ai.update(16.0, ball_y, &field);
            assert_eq!(ai.pos.y, 250.0, "moved for ball_y {ball_y}");
        }
    }

    #[test]
    fn test_ai_never_leaves_playfield() {
        let field = Playfield::default();
        let mut ai = Paddle::new(Side::Ai, &field);
        ai.pos.y = 495.0;
        ai.update(100.0, 600.0, &field);
        assert_eq!(ai.pos.y, 500.0);
    }

    #[test]
    fn test_ball_reset() {
        let field = Playfield::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(&field);
        for _ in 0..100 {
            ball.pos = Vec2::new(-5.0, 17.0);
            ball.reset(&field, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            assert!((ball.vel.x.abs() - 0.5).abs() < 1e-6);
            assert!(ball.vel.y.abs() <= 0.25 + 1e-6);
        }
    }

    #[test]
    fn test_ball_reset_serves_both_ways() {
        let field = Playfield::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(&field);
        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            ball.reset(&field, &mut rng);
            if ball.vel.x < 0.0 {
                left += 1;
            } else {
                right += 1;
            }
        }
        assert!(left > 50 && right > 50, "left {left} right {right}");
    }

    #[test]
    fn test_start_resets_in_place() {
        let mut state = GameState::new(3);
        state.player.score = 4;
        state.ai.score = 5;
        state.end_match(Side::Ai);
        state.ball.pos = Vec2::new(12.0, 34.0);

        state.start();
        assert!(state.is_running());
        assert_eq!(state.score_line(), (0, 0));
        assert_eq!(state.ball.pos, state.playfield.center());
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_check_win() {
        let mut state = GameState::new(1);
        assert_eq!(state.check_win(), None);
        state.ai.score = 5;
        assert_eq!(state.check_win(), Some(Side::Ai));
        state.player.score = 5;
        assert_eq!(state.check_win(), Some(Side::Player));
    }
}
