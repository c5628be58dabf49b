use super::{Controls, Countdown, Game, Interval, Status, FRAME};
use rand::Rng;
use std::time::Duration;

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 350.0;
pub const PLAYER_SIZE: f64 = 30.0;
pub const COIN_SIZE: f64 = 30.0;
pub const GAME_TIME: Duration = Duration::from_secs(30);

const MOVE_SPEED: f64 = 8.0;
const SPAWN_PERIOD: Duration = Duration::from_millis(1500);
const COIN_LIFE: Duration = Duration::from_millis(5000);
const KINDS: [&str; 5] = ["🪙", "💰", "🏆", "💎", "⭐"];

#[derive(Debug, Clone)]
pub struct Coin {
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    life: Countdown,
}

impl Coin {
    fn new(kind: &'static str, x: f64, y: f64) -> Coin {
        Coin {
            kind,
            x,
            y,
            life: Countdown::new(COIN_LIFE),
        }
    }

    fn touches(&self, (x, y): (f64, f64)) -> bool {
        x < self.x + COIN_SIZE
            && x + PLAYER_SIZE > self.x
            && y < self.y + COIN_SIZE
            && y + PLAYER_SIZE > self.y
    }
}

/// ## Coin collector
///
/// Walk around the field picking up coins. A coin that isn't picked up
/// disappears five seconds after it shows up.
pub struct CoinCollector<R: Rng> {
    rng: R,
    controls: Controls,
    player: (f64, f64),
    coins: Vec<Coin>,
    frame: Interval,
    spawner: Interval,
    remaining: Countdown,
    collected: u32,
    status: Status,
}

impl<R: Rng> CoinCollector<R> {
    /// Starts with one coin already on the field.
    pub fn new(rng: R) -> CoinCollector<R> {
        let mut game = CoinCollector {
            rng,
            controls: Controls::default(),
            player: ((WIDTH - PLAYER_SIZE) / 2.0, HEIGHT - 50.0),
            coins: vec![],
            frame: Interval::new(FRAME),
            spawner: Interval::new(SPAWN_PERIOD),
            remaining: Countdown::new(GAME_TIME),
            collected: 0,
            status: Status::Running,
        };
        game.spawn();
        game
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn player(&self) -> (f64, f64) {
        self.player
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn time_left(&self) -> Duration {
        self.remaining.remaining()
    }

    fn walk(&mut self) {
        let (x, y) = &mut self.player;
        if self.controls.left {
            *x = (*x - MOVE_SPEED).max(0.0);
        }
        if self.controls.right {
            *x = (*x + MOVE_SPEED).min(WIDTH - PLAYER_SIZE);
        }
        if self.controls.up {
            *y = (*y - MOVE_SPEED).max(0.0);
        }
        if self.controls.down {
            *y = (*y + MOVE_SPEED).min(HEIGHT - PLAYER_SIZE);
        }
        let player = self.player;
        let before = self.coins.len();
        self.coins.retain(|coin| !coin.touches(player));
        self.collected += (before - self.coins.len()) as u32;
    }

    fn spawn(&mut self) {
        let kind = KINDS[self.rng.gen_range(0..KINDS.len())];
        let x = self.rng.gen_range(0.0..WIDTH - 40.0);
        let y = self.rng.gen_range(0.0..HEIGHT - 80.0);
        self.coins.push(Coin::new(kind, x, y));
    }
}

impl<R: Rng> Game for CoinCollector<R> {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        for _ in 0..self.frame.advance(elapsed) {
            self.walk();
        }
        self.coins.retain_mut(|coin| !coin.life.advance(elapsed));
        for _ in 0..self.spawner.advance(elapsed) {
            self.spawn();
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
        self.collected
    }
}
