use super::{Game, Interval, Status};
use rand::seq::index;
use rand::Rng;
use std::time::Duration;

pub const GAME_TIME: u32 = 60;

const SECOND: Duration = Duration::from_secs(1);

#[derive(Debug, PartialEq)]
pub struct Part {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub static PARTS: [Part; 8] = [
    Part { id: "cpu", name: "CPU", icon: "🧠" },
    Part { id: "ram", name: "RAM", icon: "💾" },
    Part { id: "gpu", name: "GPU", icon: "🎮" },
    Part { id: "hdd", name: "HDD", icon: "💿" },
    Part { id: "psu", name: "PSU", icon: "⚡" },
    Part { id: "fan", name: "Cooling Fan", icon: "🌀" },
    Part { id: "motherboard", name: "Motherboard", icon: "🔌" },
    Part { id: "ssd", name: "SSD", icon: "💽" },
];

/// ## Computer repair
///
/// Three to five parts of the computer are broken. Each one is fixed by
/// dropping the matching part from the inventory onto its slot before
/// the minute runs out.
pub struct Repair {
    broken: Vec<&'static Part>,
    fixed: Vec<&'static str>,
    clock: Interval,
    time_left: u32,
    status: Status,
}

impl Repair {
    pub fn new<R: Rng>(rng: &mut R) -> Repair {
        let count = rng.gen_range(3..=5);
        Repair {
            broken: index::sample(rng, PARTS.len(), count)
                .into_iter()
                .map(|i| &PARTS[i])
                .collect(),
            fixed: vec![],
            clock: Interval::new(SECOND),
            time_left: GAME_TIME,
            status: Status::Running,
        }
    }

    /// Parts that were broken when the computer was opened.
    pub fn broken(&self) -> &[&'static Part] {
        &self.broken
    }

    pub fn fixed(&self) -> usize {
        self.fixed.len()
    }

    pub fn needs_repair(&self, slot: &str) -> bool {
        self.broken.iter().any(|p| p.id == slot) && !self.fixed.iter().any(|&id| id == slot)
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Drops `part` onto `slot`. Only the matching part fixes a broken
    /// slot, and only once.
    pub fn install(&mut self, slot: &str, part: &str) -> bool {
        if self.status.is_over() || slot != part || !self.needs_repair(slot) {
            return false;
        }
        if let Some(p) = self.broken.iter().find(|p| p.id == slot) {
            self.fixed.push(p.id);
        }
        if self.fixed.len() == self.broken.len() {
            self.status = Status::Won;
        }
        true
    }

    /// Share of broken parts fixed, as a whole percentage.
    pub fn accuracy(&self) -> u32 {
        (self.fixed.len() as f64 / self.broken.len() as f64 * 100.0).round() as u32
    }

    pub fn verdict(&self) -> &'static str {
        match self.accuracy() {
            100 => "Perfect! Computer fully repaired!",
            75..=99 => "Great job! Almost there!",
            50..=74 => "Good effort! Keep practicing!",
            1..=49 => "Nice try! Try again!",
            _ => "No parts fixed. Better luck next time!",
        }
    }
}

impl Game for Repair {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        for _ in 0..self.clock.advance(elapsed) {
            self.time_left -= 1;
            if self.time_left == 0 {
                self.status = Status::Finished;
                return;
            }
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
        self.fixed.len() as u32
    }
}
