use super::{Countdown, Game, Interval, Status};
use rand::seq::index;
use rand::Rng;
use std::time::Duration;

pub const HOLES: usize = 9;
pub const GAME_TIME: u32 = 30;

const MOLES: [&str; 4] = ["🐹", "🐭", "🦔", "🐰"];
const SECOND: Duration = Duration::from_secs(1);

/// ## Whack-a-mole
///
/// Moles pop up in batches of one or two. Each batch replaces the last
/// and hides on its own timer if nobody whacks it.
pub struct WhackAMole<R: Rng> {
    rng: R,
    holes: [Option<&'static str>; HOLES],
    hide: Option<Countdown>,
    spawner: Interval,
    clock: Interval,
    time_left: u32,
    score: u32,
    status: Status,
}

impl<R: Rng> WhackAMole<R> {
    pub fn new(mut rng: R) -> WhackAMole<R> {
        let period = Duration::from_millis(rng.gen_range(800..2000));
        let mut game = WhackAMole {
            rng,
            holes: [None; HOLES],
            hide: None,
            spawner: Interval::new(period),
            clock: Interval::new(SECOND),
            time_left: GAME_TIME,
            score: 0,
            status: Status::Running,
        };
        game.show_moles();
        game
    }

    pub fn holes(&self) -> &[Option<&'static str>] {
        &self.holes
    }

    /// Holes with a mole showing.
    pub fn visible(&self) -> Vec<usize> {
        (0..HOLES).filter(|&i| self.holes[i].is_some()).collect()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn spawn_period(&self) -> Duration {
        self.spawner.period()
    }

    /// Scores a point when a mole is showing in `hole`.
    pub fn whack(&mut self, hole: usize) -> bool {
        if self.status.is_over() {
            return false;
        }
        match self.holes.get_mut(hole) {
            Some(mole) if mole.is_some() => {
                *mole = None;
                self.score += 1;
                true
            }
            _ => false,
        }
    }

    fn show_moles(&mut self) {
        self.holes = [None; HOLES];
        let count = if self.rng.gen_bool(0.7) { 1 } else { 2 };
        for hole in index::sample(&mut self.rng, HOLES, count).into_iter() {
            self.holes[hole] = Some(MOLES[self.rng.gen_range(0..MOLES.len())]);
        }
        let stay = self.rng.gen_range(2500..=5000);
        self.hide = Some(Countdown::new(Duration::from_millis(stay)));
    }
}

impl<R: Rng> Game for WhackAMole<R> {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        if let Some(hide) = &mut self.hide {
            if hide.advance(elapsed) {
                self.hide = None;
                self.holes = [None; HOLES];
            }
        }
        for _ in 0..self.spawner.advance(elapsed) {
            self.show_moles();
        }
        let seconds = self.clock.advance(elapsed);
        self.time_left = self.time_left.saturating_sub(seconds);
        if self.time_left == 0 {
            self.holes = [None; HOLES];
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
