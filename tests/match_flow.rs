//! End-to-end match scenarios driven through `Game` with headless backends

use glam::Vec2;
use neon_pong::platform::HeadlessUi;
use neon_pong::renderer::RecordingSurface;
use neon_pong::scores::{RecordingScoreSink, ScoreSubmission};
use neon_pong::sim::{MatchPhase, Side};
use neon_pong::{Game, Settings};

fn new_game(seed: u64) -> (Game<RecordingSurface, HeadlessUi>, RecordingScoreSink) {
    let recorder = RecordingScoreSink::new();
    let game = Game::new(
        seed,
        RecordingSurface::default(),
        HeadlessUi::default(),
        Box::new(recorder.clone()),
        Settings::default(),
    );
    (game, recorder)
}

#[test]
fn five_exits_left_lose_the_match() {
    let (mut game, recorder) = new_game(2024);
    game.start();

    for point in 1..=5 {
        game.state_mut().ball.pos = Vec2::new(-1.0, 300.0);
        game.update(0.0);
        assert_eq!(game.state().ai.score, point);
        assert_eq!(game.state().ball.pos, Vec2::new(400.0, 300.0));
    }

    assert_eq!(game.state().score_line(), (0, 5));
    assert_eq!(game.state().phase, MatchPhase::Finished { winner: Side::Ai });
    assert_eq!(game.ui().scores, (0, 5));

    let summary = game.ui().game_over.expect("game over shown");
    assert_eq!(summary.winner, Side::Ai);
    assert_eq!(summary.message(), "YOU LOSE");
    assert_eq!(summary.color(), "#bc13fe");
    assert_eq!(recorder.submissions(), vec![ScoreSubmission::new("neon-pong", 0)]);

    // No further points once the match is over
    game.state_mut().ball.pos = Vec2::new(-1.0, 300.0);
    game.update(0.0);
    assert_eq!(game.state().score_line(), (0, 5));
    assert_eq!(recorder.submissions().len(), 1);
}

#[test]
fn center_hit_on_player_paddle() {
    let (mut game, _) = new_game(1);
    game.start();

    let center = game.state().player.center_y();
    let ball = &mut game.state_mut().ball;
    ball.pos = Vec2::new(25.0, center);
    ball.vel = Vec2::new(-0.5, 0.0);

    game.update(0.0);
    let vel = game.state().ball.vel;
    assert!((vel.x - 0.525).abs() < 1e-6, "vx = {}", vel.x);
    assert_eq!(vel.y, 0.0);
}

#[test]
fn first_frame_after_start_moves_nothing() {
    let (mut game, _) = new_game(77);
    game.start();
    let ball = game.state().ball.pos;
    let player = game.state().player.pos;
    let ai = game.state().ai.pos;

    assert!(game.frame(1_234_567.0));
    assert_eq!(game.state().ball.pos, ball);
    assert_eq!(game.state().player.pos, player);
    assert_eq!(game.state().ai.pos, ai);
}

#[test]
fn slow_frame_advances_by_full_elapsed_time() {
    let (mut game, _) = new_game(77);
    game.start();
    game.frame(1000.0);

    let start = game.state().ball.pos;
    game.state_mut().ball.vel = Vec2::new(0.5, 0.0);

    // A 250 ms hitch moves the ball as far as 250 ms of travel
    assert!(game.frame(1250.0));
    assert_eq!(game.state().ball.pos.x - start.x, 125.0);
    assert_eq!(game.state().ball.pos.y, start.y);
}

#[test]
fn rematch_after_win() {
    let (mut game, recorder) = new_game(9);
    game.start();

    for _ in 0..5 {
        game.state_mut().ball.pos = Vec2::new(801.0, 300.0);
        game.update(0.0);
    }
    assert_eq!(game.state().phase, MatchPhase::Finished { winner: Side::Player });
    assert_eq!(game.ui().game_over.map(|s| s.message()), Some("YOU WIN"));
    assert_eq!(recorder.submissions(), vec![ScoreSubmission::new("neon-pong", 5)]);

    game.reset_game();
    assert!(game.is_running());
    assert_eq!(game.state().score_line(), (0, 0));
    assert_eq!(game.ui().scores, (0, 0));
    assert!(game.ui().game_over.is_none());
}

#[test]
fn loop_runs_until_someone_wins() {
    let (mut game, _) = new_game(31337);
    game.start();

    // Keep the player paddle on the far side from the ball so it never
    // returns a shot; every rally ends in a point
    let mut timestamp = 0.0;
    let mut frames = 0;
    loop {
        let away = if game.state().ball.pos.y > 300.0 { 0.0 } else { 600.0 };
        game.on_pointer_move(away);
        if !game.frame(timestamp) {
            break;
        }
        timestamp += 16.0;
        frames += 1;
        assert!(frames < 100_000, "match never ended");
    }

    let winner = game.state().phase.winner().expect("finished");
    let (player, ai) = game.state().score_line();
    assert_eq!(player.max(ai), 5);
    assert_eq!(game.ui().game_over.map(|s| s.winner), Some(winner));
    assert_eq!(game.ui().scores, (player, ai));
}
