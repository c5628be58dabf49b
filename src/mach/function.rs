use super::Val;
use rand::Rng;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Range of the answer a simulated `input()` gives.
pub const INPUT_ANSWERS: RangeInclusive<i64> = 1..=10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    RandInt,
}

impl Function {
    /// Names a `from <module> import ...` line makes callable.
    /// Importing anything from a module binds all of them.
    pub fn for_module(module: &str) -> &'static [(&'static str, Function)] {
        match module {
            "random" => &[("randint", Function::RandInt)],
            _ => &[],
        }
    }

    /// `floor(random * (max - min + 1)) + min`, so reversed bounds
    /// still draw a number, from `max + 1` up to `min`.
    pub fn randint<R: Rng>(rng: &mut R, min: i64, max: i64) -> Val {
        let span = max as f64 - min as f64 + 1.0;
        Val::Number((rng.gen::<f64>() * span).floor() + min as f64)
    }

    pub fn input<R: Rng>(rng: &mut R) -> i64 {
        rng.gen_range(INPUT_ANSWERS)
    }
}

/// ## Import table
///
/// Reset with the variables at the start of every run.
#[derive(Debug, Default)]
pub struct Imports {
    functions: HashMap<&'static str, Function>,
}

impl Imports {
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    pub fn import(&mut self, module: &str) {
        for (name, function) in Function::for_module(module) {
            self.functions.insert(*name, *function);
        }
    }

    pub fn get(&self, name: &str) -> Option<Function> {
        self.functions.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randint_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            match Function::randint(&mut rng, 3, 5) {
                Val::Number(n) => assert!(n == 3.0 || n == 4.0 || n == 5.0),
                other => panic!("{:?}", other),
            }
        }
        assert_eq!(Function::randint(&mut rng, 4, 4), Val::Number(4.0));
    }

    #[test]
    fn test_randint_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            match Function::randint(&mut rng, 5, 1) {
                Val::Number(n) => assert!(n.fract() == 0.0 && (2.0..=5.0).contains(&n)),
                other => panic!("{:?}", other),
            }
        }
    }

    #[test]
    fn test_import_random() {
        let mut imports = Imports::default();
        imports.import("math");
        assert_eq!(imports.get("randint"), None);
        imports.import("random");
        assert_eq!(imports.get("randint"), Some(Function::RandInt));
        imports.clear();
        assert_eq!(imports.get("randint"), None);
    }
}
