use super::{Controls, Countdown, Game, Interval, Status, FRAME};
use std::time::Duration;

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 300.0;
pub const RACKET_WIDTH: f64 = 60.0;
pub const BALL_SIZE: f64 = 12.0;
pub const LIVES: u32 = 3;
pub const HITS_TO_WIN: u32 = 50;
pub const GAME_TIME: Duration = Duration::from_secs(120);

const RACKET_SPEED: f64 = 8.0;
const MAX_SPEED_X: f64 = 7.0;
const SERVE: (f64, f64) = (WIDTH / 2.0 - BALL_SIZE / 2.0, HEIGHT - 50.0);
const SERVE_VELOCITY: (f64, f64) = (3.0, -4.0);

/// ## Ping pong
///
/// Keep the ball off the floor with a racket along the bottom edge.
/// Speeds are in pixels per frame.
pub struct Pong {
    controls: Controls,
    racket_x: f64,
    ball: (f64, f64),
    velocity: (f64, f64),
    hits: u32,
    lives: u32,
    frame: Interval,
    remaining: Countdown,
    status: Status,
}

impl Default for Pong {
    fn default() -> Self {
        Pong::new()
    }
}

impl Pong {
    pub fn new() -> Pong {
        Pong {
            controls: Controls::default(),
            racket_x: (WIDTH - RACKET_WIDTH) / 2.0,
            ball: SERVE,
            velocity: SERVE_VELOCITY,
            hits: 0,
            lives: LIVES,
            frame: Interval::new(FRAME),
            remaining: Countdown::new(GAME_TIME),
            status: Status::Running,
        }
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    /// Centers the racket under a pointer, kept inside the field.
    pub fn move_racket_to(&mut self, x: f64) {
        self.racket_x = (x - RACKET_WIDTH / 2.0).max(0.0).min(WIDTH - RACKET_WIDTH);
    }

    pub fn racket_x(&self) -> f64 {
        self.racket_x
    }

    pub fn ball(&self) -> (f64, f64) {
        self.ball
    }

    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    fn step(&mut self) {
        if self.controls.left && self.racket_x > 0.0 {
            self.racket_x -= RACKET_SPEED;
        }
        if self.controls.right && self.racket_x < WIDTH - RACKET_WIDTH {
            self.racket_x += RACKET_SPEED;
        }

        let (x, y) = (self.ball.0 + self.velocity.0, self.ball.1 + self.velocity.1);
        self.ball = (x, y);
        if x <= 0.0 || x >= WIDTH - BALL_SIZE {
            self.velocity.0 = -self.velocity.0;
        }
        if y <= 0.0 {
            self.velocity.1 = -self.velocity.1;
        }

        // A ball already on its way up can't be hit twice.
        if self.velocity.1 > 0.0
            && y >= HEIGHT - 40.0
            && y <= HEIGHT - 20.0
            && x >= self.racket_x - BALL_SIZE
            && x <= self.racket_x + RACKET_WIDTH
        {
            self.hit(x);
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

    fn hit(&mut self, x: f64) {
        self.velocity.1 = -self.velocity.1;
        self.hits += 1;
        let offset = (x - self.racket_x) / RACKET_WIDTH - 0.5;
        self.velocity.0 = (self.velocity.0 + offset * 3.0)
            .max(-MAX_SPEED_X)
            .min(MAX_SPEED_X);
        if self.hits % 5 == 0 {
            self.velocity.0 *= 1.05;
            self.velocity.1 *= 1.05;
        }
        if self.hits >= HITS_TO_WIN {
            self.status = Status::Won;
        }
    }
}

impl Game for Pong {
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
        self.hits
    }
}
