/*!
## Arcade

Headless versions of the page's minigames. Each session owns all of its
state, including its input controls, and moves forward only when it is
handed elapsed time. Nothing here reads a clock or touches a screen.

*/

use std::time::Duration;

mod breakout;
mod catcher;
mod clock;
mod coins;
mod memory;
mod mole;
mod pong;
mod repair;
mod shooter;

pub use breakout::{Breakout, Brick};
pub use catcher::{Animal, Catcher};
pub use clock::{Countdown, Interval};
pub use coins::{Coin, CoinCollector};
pub use memory::{Card, MemoryMatch};
pub use mole::WhackAMole;
pub use pong::Pong;
pub use repair::{Part, Repair, PARTS};
pub use shooter::{Enemy, Laser, Shooter};

/// One animation frame at roughly sixty frames a second.
pub const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Running,
    Won,
    Lost,
    /// The session's time ran out.
    Finished,
    /// Closed before it ended.
    Stopped,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Running
    }
}

/// Buttons held for the current session.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

pub trait Game {
    /// Moves the session forward by `elapsed`. Does nothing once over.
    fn tick(&mut self, elapsed: Duration);
    fn stop(&mut self);
    fn status(&self) -> Status;
    fn score(&self) -> u32;
}

/// ## Tick scheduler
///
/// Drives one session in whole frames. Time handed to a scheduler that
/// hasn't been started, or whose session is over, is dropped.
pub struct Scheduler<G: Game> {
    game: G,
    frame: Interval,
    started: bool,
}

impl<G: Game> Scheduler<G> {
    pub fn new(game: G) -> Scheduler<G> {
        Scheduler {
            game,
            frame: Interval::new(FRAME),
            started: false,
        }
    }

    pub fn start(&mut self) {
        self.started = !self.game.status().is_over();
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.game.status().is_over()
    }

    /// Returns the number of frames delivered.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.started {
            return 0;
        }
        let frames = self.frame.advance(elapsed);
        let mut delivered = 0;
        for _ in 0..frames {
            if self.game.status().is_over() {
                break;
            }
            self.game.tick(FRAME);
            delivered += 1;
        }
        delivered
    }

    pub fn stop(&mut self) {
        self.game.stop();
        self.started = false;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn into_game(self) -> G {
        self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        ticks: u32,
        limit: u32,
        status: Status,
    }

    impl Game for Counter {
        fn tick(&mut self, elapsed: Duration) {
            assert_eq!(elapsed, FRAME);
            self.ticks += 1;
            if self.ticks == self.limit {
                self.status = Status::Finished;
            }
        }
        fn stop(&mut self) {
            self.status = Status::Stopped;
        }
        fn status(&self) -> Status {
            self.status
        }
        fn score(&self) -> u32 {
            self.ticks
        }
    }

    fn counter(limit: u32) -> Scheduler<Counter> {
        Scheduler::new(Counter {
            ticks: 0,
            limit,
            status: Status::Running,
        })
    }

    #[test]
    fn test_nothing_happens_before_start() {
        let mut s = counter(10);
        assert_eq!(s.advance(Duration::from_secs(1)), 0);
        assert_eq!(s.game().score(), 0);
    }

    #[test]
    fn test_frames_are_whole() {
        let mut s = counter(100);
        s.start();
        assert_eq!(s.advance(Duration::from_millis(40)), 2);
        assert_eq!(s.advance(Duration::from_millis(8)), 1);
        assert_eq!(s.game().score(), 3);
    }

    #[test]
    fn test_session_end_stops_delivery() {
        let mut s = counter(3);
        s.start();
        assert_eq!(s.advance(Duration::from_secs(1)), 3);
        assert!(!s.is_running());
        assert_eq!(s.advance(Duration::from_secs(1)), 0);
        assert_eq!(s.into_game().status(), Status::Finished);
    }

    #[test]
    fn test_stop() {
        let mut s = counter(100);
        s.start();
        s.advance(FRAME);
        s.stop();
        assert_eq!(s.advance(Duration::from_secs(1)), 0);
        assert_eq!(s.game().status(), Status::Stopped);
        s.start();
        assert!(!s.is_running());
    }
}
