use super::{Controls, Countdown, Game, Interval, Status, FRAME};
use std::time::Duration;

pub const WIDTH: f64 = 500.0;
pub const HEIGHT: f64 = 400.0;
pub const PADDLE_WIDTH: f64 = 80.0;
pub const BALL_SIZE: f64 = 12.0;
pub const BRICK_WIDTH: f64 = 60.0;
pub const BRICK_HEIGHT: f64 = 20.0;
pub const ROWS: usize = 5;
pub const COLUMNS: usize = 7;
pub const LIVES: u32 = 3;
pub const GAME_TIME: Duration = Duration::from_secs(120);

const PADDLE_SPEED: f64 = 8.0;
const MAX_SPEED_X: f64 = 6.0;
const POINTS: u32 = 10;
const SERVE: (f64, f64) = (WIDTH / 2.0 - BALL_SIZE / 2.0, HEIGHT - 50.0);
const SERVE_VELOCITY: (f64, f64) = (3.0, -3.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub x: f64,
    pub y: f64,
}

impl Brick {
    fn overlaps(&self, (x, y): (f64, f64)) -> bool {
        x < self.x + BRICK_WIDTH
            && x + BALL_SIZE > self.x
            && y < self.y + BRICK_HEIGHT
            && y + BALL_SIZE > self.y
    }
}

fn wall() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(ROWS * COLUMNS);
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            bricks.push(Brick {
                x: col as f64 * 65.0 + 25.0,
                y: row as f64 * 25.0 + 50.0,
            });
        }
    }
    bricks
}

/// ## Brick breaker
///
/// Bounce the ball off the paddle to clear the wall of bricks. Each
/// brick is worth ten points. Speeds are in pixels per frame.
pub struct Breakout {
    controls: Controls,
    paddle_x: f64,
    ball: (f64, f64),
    velocity: (f64, f64),
    bricks: Vec<Brick>,
    score: u32,
    lives: u32,
    frame: Interval,
    remaining: Countdown,
    status: Status,
}

impl Default for Breakout {
    fn default() -> Self {
        Breakout::new()
    }
}

impl Breakout {
    pub fn new() -> Breakout {
        Breakout {
            controls: Controls::default(),
            paddle_x: (WIDTH - PADDLE_WIDTH) / 2.0,
            ball: SERVE,
            velocity: SERVE_VELOCITY,
            bricks: wall(),
            score: 0,
            lives: LIVES,
            frame: Interval::new(FRAME),
            remaining: Countdown::new(GAME_TIME),
            status: Status::Running,
        }
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn move_paddle_to(&mut self, x: f64) {
        self.paddle_x = (x - PADDLE_WIDTH / 2.0).max(0.0).min(WIDTH - PADDLE_WIDTH);
    }

    pub fn paddle_x(&self) -> f64 {
        self.paddle_x
    }

    pub fn ball(&self) -> (f64, f64) {
        self.ball
    }

    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    /// Bricks still standing.
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    fn step(&mut self) {
        if self.controls.left {
            self.paddle_x = (self.paddle_x - PADDLE_SPEED).max(0.0);
        }
        if self.controls.right {
            self.paddle_x = (self.paddle_x + PADDLE_SPEED).min(WIDTH - PADDLE_WIDTH);
        }

        let (x, y) = (self.ball.0 + self.velocity.0, self.ball.1 + self.velocity.1);
        self.ball = (x, y);
        if x <= 0.0 || x >= WIDTH - BALL_SIZE {
            self.velocity.0 = -self.velocity.0;
        }
        if y <= 0.0 {
            self.velocity.1 = -self.velocity.1;
        }

        if self.velocity.1 > 0.0
            && y >= HEIGHT - 42.0
            && y <= HEIGHT - 20.0
            && x >= self.paddle_x - BALL_SIZE
            && x <= self.paddle_x + PADDLE_WIDTH
        {
            self.velocity.1 = -self.velocity.1;
            let offset = (x - self.paddle_x) / PADDLE_WIDTH - 0.5;
            self.velocity.0 = (self.velocity.0 + offset * 2.0)
                .max(-MAX_SPEED_X)
                .min(MAX_SPEED_X);
        }

        // One brick per frame.
        if let Some(hit) = self.bricks.iter().position(|b| b.overlaps((x, y))) {
            self.bricks.remove(hit);
            self.velocity.1 = -self.velocity.1;
            self.score += POINTS;
            if self.bricks.is_empty() {
                self.status = Status::Won;
                return;
            }
        }

        if y >= HEIGHT {
            self.lives -= 1;
            if self.lives == 0 {
                self.status = Status::Lost;
                return;
            }
            self.ball = SERVE;
            self.velocity = SERVE_VELOCITY;
        }
    }
}

impl Game for Breakout {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        for _ in 0..self.frame.advance(elapsed) {
            self.step();
            if self.status.is_over() {
                return;
            }
        }
        if self.remaining.advance(elapsed) {
            self.status = Status::Finished;
        }
    }

    fn stop(&mut self) {
        if !self.status.is_over() {
            self.status = Status::Stopped;
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_layout() {
        let b = Breakout::new();
        assert_eq!(b.bricks().len(), 35);
        assert_eq!(b.bricks()[0], Brick { x: 25.0, y: 50.0 });
        assert_eq!(b.bricks()[34], Brick { x: 415.0, y: 150.0 });
    }

    #[test]
    fn test_serve() {
        let mut b = Breakout::new();
        assert_eq!(b.ball(), (244.0, 350.0));
        assert_eq!(b.paddle_x(), 210.0);
        b.tick(FRAME);
        assert_eq!(b.ball(), (247.0, 347.0));
    }

    #[test]
    fn test_paddle() {
        let mut b = Breakout::new();
        b.controls_mut().left = true;
        b.tick(FRAME);
        assert_eq!(b.paddle_x(), 202.0);
        b.move_paddle_to(1000.0);
        assert_eq!(b.paddle_x(), WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut b = Breakout::new();
        b.ball = (240.0, 355.0);
        b.velocity = (0.0, 3.0);
        b.tick(FRAME);
        assert_eq!(b.velocity().1, -3.0);
        assert!((b.velocity().0 + 0.25).abs() < 1e-9);
        b.tick(FRAME);
        assert_eq!(b.velocity().1, -3.0);
    }

    #[test]
    fn test_brick_breaks() {
        let mut b = Breakout::new();
        b.ball = (30.0, 172.0);
        b.velocity = (0.0, -3.0);
        b.tick(FRAME);
        assert_eq!(b.bricks().len(), 34);
        assert!(!b.bricks().contains(&Brick { x: 25.0, y: 150.0 }));
        assert_eq!(b.velocity(), (0.0, 3.0));
        assert_eq!(b.score(), 10);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut b = Breakout::new();
        b.bricks = vec![Brick { x: 25.0, y: 150.0 }];
        b.ball = (30.0, 172.0);
        b.velocity = (0.0, -3.0);
        b.tick(FRAME);
        assert_eq!(b.status(), Status::Won);
    }

    #[test]
    fn test_miss_costs_a_life() {
        let mut b = Breakout::new();
        b.ball = (10.0, 398.0);
        b.velocity = (0.0, 3.0);
        b.move_paddle_to(WIDTH);
        b.tick(FRAME);
        assert_eq!(b.lives(), 2);
        assert_eq!(b.ball(), SERVE);
        b.lives = 1;
        b.ball = (10.0, 398.0);
        b.velocity = (0.0, 3.0);
        b.tick(FRAME);
        assert_eq!(b.status(), Status::Lost);
    }

    #[test]
    fn test_time_limit() {
        let mut b = Breakout::new();
        b.remaining = Countdown::new(FRAME);
        b.tick(FRAME);
        assert_eq!(b.status(), Status::Finished);
    }
}
