use crate::mach::{Outcome, Runtime};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod run_test;

fn runtime() -> Runtime<StdRng> {
    Runtime::new(StdRng::seed_from_u64(1978))
}

fn run(source: &str) -> Outcome {
    runtime().run(source)
}

fn output(source: &str) -> String {
    let outcome = run(source);
    assert!(outcome.is_ok(), "{:?}", outcome.error());
    outcome.output().to_string()
}
