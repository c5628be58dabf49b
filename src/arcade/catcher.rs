use super::{Controls, Countdown, Game, Interval, Status, FRAME};
use rand::Rng;
use std::time::Duration;

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 400.0;
pub const BASKET_WIDTH: f64 = 60.0;
pub const BASKET_HEIGHT: f64 = 40.0;
pub const ANIMAL_SIZE: f64 = 30.0;
pub const GAME_TIME: Duration = Duration::from_secs(30);

const BASKET_Y: f64 = HEIGHT - 50.0;
const BASKET_SPEED: f64 = 10.0;
const FALL_STEP: f64 = 4.0;
const FALL_PERIOD: Duration = Duration::from_millis(50);
const SPAWN_PERIOD: Duration = Duration::from_millis(2000);
const ANIMALS: [&str; 8] = ["🐶", "🐱", "🐰", "🐹", "🐨", "🐼", "🦊", "🐸"];

#[derive(Debug, Clone)]
pub struct Animal {
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    fall: Interval,
}

impl Animal {
    fn new(kind: &'static str, x: f64, y: f64) -> Animal {
        Animal {
            kind,
            x,
            y,
            fall: Interval::new(FALL_PERIOD),
        }
    }

    fn in_basket(&self, basket_x: f64) -> bool {
        self.x < basket_x + BASKET_WIDTH
            && self.x + ANIMAL_SIZE > basket_x
            && self.y < BASKET_Y + BASKET_HEIGHT
            && self.y + ANIMAL_SIZE > BASKET_Y
    }
}

/// ## Animal rescue
///
/// Animals drop from the top of the field and the basket at the bottom
/// catches them. Each animal falls on its own timer from when it spawned.
pub struct Catcher<R: Rng> {
    rng: R,
    controls: Controls,
    basket_x: f64,
    animals: Vec<Animal>,
    frame: Interval,
    spawner: Interval,
    remaining: Countdown,
    saved: u32,
    missed: u32,
    status: Status,
}

impl<R: Rng> Catcher<R> {
    pub fn new(rng: R) -> Catcher<R> {
        Catcher {
            rng,
            controls: Controls::default(),
            basket_x: (WIDTH - BASKET_WIDTH) / 2.0,
            animals: vec![],
            frame: Interval::new(FRAME),
            spawner: Interval::new(SPAWN_PERIOD),
            remaining: Countdown::new(GAME_TIME),
            saved: 0,
            missed: 0,
            status: Status::Running,
        }
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn basket_x(&self) -> f64 {
        self.basket_x
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn saved(&self) -> u32 {
        self.saved
    }

    pub fn missed(&self) -> u32 {
        self.missed
    }

    pub fn time_left(&self) -> Duration {
        self.remaining.remaining()
    }

    fn move_basket(&mut self) {
        if self.controls.left && self.basket_x > 0.0 {
            self.basket_x -= BASKET_SPEED;
        }
        if self.controls.right && self.basket_x < WIDTH - BASKET_WIDTH {
            self.basket_x += BASKET_SPEED;
        }
    }

    fn fall(&mut self, elapsed: Duration) {
        let basket_x = self.basket_x;
        let (mut saved, mut missed) = (0, 0);
        self.animals.retain_mut(|animal| {
            for _ in 0..animal.fall.advance(elapsed) {
                if animal.y > HEIGHT {
                    missed += 1;
                    return false;
                }
                animal.y += FALL_STEP;
                if animal.in_basket(basket_x) {
                    saved += 1;
                    return false;
                }
            }
            true
        });
        self.saved += saved;
        self.missed += missed;
    }

    fn spawn(&mut self) {
        let kind = ANIMALS[self.rng.gen_range(0..ANIMALS.len())];
        let x = self.rng.gen_range(0.0..WIDTH - ANIMAL_SIZE);
        self.animals.push(Animal::new(kind, x, -ANIMAL_SIZE));
    }
}

impl<R: Rng> Game for Catcher<R> {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        for _ in 0..self.frame.advance(elapsed) {
            self.move_basket();
        }
        self.fall(elapsed);
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
        self.saved
    }
}
