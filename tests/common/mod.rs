#![allow(dead_code)]
use playground::mach::{Outcome, Runtime};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn runtime() -> Runtime<StdRng> {
    runtime_seeded(1978)
}

pub fn runtime_seeded(seed: u64) -> Runtime<StdRng> {
    Runtime::new(StdRng::seed_from_u64(seed))
}

pub fn exec(source: &str) -> Outcome {
    runtime().run(source)
}

/// The panel text for one run, as the user would see it.
pub fn panel(source: &str) -> String {
    exec(source).panel()
}
