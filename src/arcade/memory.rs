use super::{Countdown, Game, Status};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

const SYMBOLS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

/// How long an unmatched pair stays face up.
pub const REVEAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub symbol: &'static str,
    pub flipped: bool,
    pub matched: bool,
}

/// ## Memory match
///
/// Sixteen face-down cards, two of each symbol. Turning a second card
/// counts a move; the pair is settled when the reveal delay runs out.
pub struct MemoryMatch {
    cards: Vec<Card>,
    flipped: Vec<usize>,
    pending: Option<Countdown>,
    moves: u32,
    pairs_found: usize,
    score: u32,
    status: Status,
}

impl MemoryMatch {
    pub fn new<R: Rng>(rng: &mut R) -> MemoryMatch {
        let mut symbols: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        symbols.shuffle(rng);
        MemoryMatch {
            cards: symbols
                .into_iter()
                .map(|symbol| Card {
                    symbol,
                    flipped: false,
                    matched: false,
                })
                .collect(),
            flipped: vec![],
            pending: None,
            moves: 0,
            pairs_found: 0,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Turns a card face up. Returns false when the turn is refused:
    /// the game is over, a pair is waiting to settle, or the card is
    /// already showing.
    pub fn flip(&mut self, index: usize) -> bool {
        if self.status.is_over() || self.pending.is_some() {
            return false;
        }
        let card = match self.cards.get_mut(index) {
            Some(card) if !card.flipped && !card.matched => card,
            _ => return false,
        };
        card.flipped = true;
        self.flipped.push(index);
        if self.flipped.len() == 2 {
            self.moves += 1;
            self.pending = Some(Countdown::new(REVEAL));
        }
        true
    }

    pub fn rating(&self) -> &'static str {
        match self.moves {
            0..=12 => "Perfect!",
            13..=16 => "Excellent!",
            17..=20 => "Great!",
            21..=25 => "Good job!",
            _ => "Amazing!",
        }
    }

    fn settle(&mut self) {
        let (first, second) = (self.flipped[0], self.flipped[1]);
        self.flipped.clear();
        if self.cards[first].symbol == self.cards[second].symbol {
            for &i in [first, second].iter() {
                self.cards[i].matched = true;
            }
            self.pairs_found += 1;
            self.score += 100;
            if self.moves <= 10 {
                self.score += 50;
            }
            if self.moves <= 15 {
                self.score += 25;
            }
            if self.pairs_found == SYMBOLS.len() {
                self.status = Status::Won;
            }
        } else {
            for &i in [first, second].iter() {
                self.cards[i].flipped = false;
            }
        }
    }
}

impl Game for MemoryMatch {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        if let Some(pending) = &mut self.pending {
            if pending.advance(elapsed) {
                self.pending = None;
                self.settle();
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
        self.score
    }
}
