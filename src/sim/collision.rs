//! Collision detection and response
//!
//! Everything is axis aligned: the walls are the top and bottom edges of the
//! playfield and the paddles are rectangles. The ball is a circle, treated as
//! its bounding box for the horizontal overlap test.

use super::state::{Ball, Paddle, Playfield, Side};
use crate::consts::{PADDLE_SPEEDUP, SPIN_FACTOR};

/// Bounce the ball off the top/bottom walls.
///
/// Inverts vertical velocity and snaps the ball tangent to the wall it crossed
/// so it cannot stick or re-trigger on the next frame. Returns true on a bounce.
pub fn wall_collision(ball: &mut Ball, playfield: &Playfield) -> bool {
    if ball.top() >= 0.0 && ball.bottom() <= playfield.height {
        return false;
    }

    ball.vel.y = -ball.vel.y;
    if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
    }
    if ball.bottom() > playfield.height {
        ball.pos.y = playfield.height - ball.radius;
    }
    true
}

/// Whether the ball overlaps a paddle: horizontal overlap of the ball's
/// bounding box with the paddle, and the ball center strictly between the
/// paddle's top and bottom edges.
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius < paddle.right()
        && ball.pos.x + ball.radius > paddle.left()
        && ball.pos.y > paddle.top()
        && ball.pos.y < paddle.bottom()
}

/// Resolve a ball/paddle hit.
///
/// Only reacts while the ball travels toward the paddle, so a ball that is
/// still overlapping on its way out is left alone. On a hit the horizontal
/// speed is reversed and amplified, capped at `ball.max_speed`, and vertical
/// "english" proportional to the offset from the paddle center is added.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !paddle_overlap(ball, paddle) {
        return false;
    }

    match paddle.side {
        Side::Player => {
            if ball.vel.x >= 0.0 {
                return false;
            }
            ball.vel.x = (ball.vel.x * -PADDLE_SPEEDUP).min(ball.max_speed);
        }
        Side::Ai => {
            if ball.vel.x <= 0.0 {
                return false;
            }
            ball.vel.x = (ball.vel.x * -PADDLE_SPEEDUP).max(-ball.max_speed);
        }
    }

    let hit_point = ball.pos.y - paddle.center_y();
    ball.vel.y += hit_point * SPIN_FACTOR;
    true
}

/// The side that wins the point if the ball center has left the playfield
pub fn scoring_side(ball: &Ball, playfield: &Playfield) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Ai)
    } else if ball.pos.x > playfield.width {
        Some(Side::Player)
    } else {
        None
    }
}
