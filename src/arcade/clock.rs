use std::time::Duration;

/// Repeating timer fed with elapsed time instead of reading a clock.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Interval {
        assert!(period > Duration::default(), "interval period must be positive");
        Interval {
            period,
            elapsed: Duration::default(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Adds `elapsed` and returns how many whole periods completed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.elapsed += elapsed;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// One-shot timer. Stays expired once it has run out.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    pub fn new(duration: Duration) -> Countdown {
        Countdown {
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == Duration::default()
    }

    /// True once the countdown has run out.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.checked_sub(elapsed).unwrap_or_default();
        self.is_expired()
    }
}
