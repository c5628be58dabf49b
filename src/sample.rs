/*!
## Example snippets

The snippets the playground can load into its editor. Asking for a name
that doesn't exist gives the default snippet.

*/

const DEFAULT: &str = r#"# Welcome to Python Playground!
print("Hello, I'm Ethan!")
for i in range(5):
    print(f"I love coding! {i+1}")"#;

const HELLO: &str = r#"# Hello World Example
print("🌍 Hello, World!")
print("🎉 Welcome to Python!")
print("✨ Let's code something amazing!")"#;

const MATH: &str = r#"# Math Fun Example
print("🧮 Let's do some math!")
print(f"5 + 3 = {5 + 3}")
print(f"10 * 2 = {10 * 2}")
print(f"15 / 3 = {15 / 3}")
print("🎯 Math is awesome!")
for i in range(1, 6):
    print(f"{i} x 2 = {i * 2}")"#;

const STORY: &str = r#"# Story Generator
print("📖 Once upon a time...")
print("🏰 There was a young coder named Ethan")
print("💻 Who loved to write Python code")
for day in range(1, 4):
    print(f"Day {day}: Ethan coded amazing projects!")
print("🎉 And they all lived happily ever after!")
print("✨ The End!")
print("💫 What story will you create?")"#;

const GAME: &str = r#"# Simple Number Game
print("🎲 Welcome to the Number Game!")
print("🤔 I'm thinking of a number...")
secret_number = 7
guess = 5
print(f"Your guess: {guess}")
if guess == secret_number:
    print("🎉 Congratulations! You got it!")
else:
    print(f"🎯 The number was {secret_number}")
    print("Try again next time!")"#;

static SAMPLES: [(&str, &str); 5] = [
    ("default", DEFAULT),
    ("hello", HELLO),
    ("math", MATH),
    ("story", STORY),
    ("game", GAME),
];

pub fn sample(name: &str) -> &'static str {
    SAMPLES
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(DEFAULT, |(_, source)| *source)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|(name, _)| *name)
}

pub fn is_sample(name: &str) -> bool {
    names().any(|n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Runtime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(name: &str) -> String {
        let mut runtime = Runtime::new(StdRng::seed_from_u64(0));
        runtime.run(sample(name)).output().to_string()
    }

    #[test]
    fn test_names() {
        assert_eq!(
            names().collect::<Vec<_>>(),
            ["default", "hello", "math", "story", "game"]
        );
        assert!(is_sample("math"));
        assert!(!is_sample("chess"));
        assert_eq!(sample("chess"), sample("default"));
    }

    #[test]
    fn test_default_sample() {
        assert_eq!(
            run("default"),
            "Hello, I'm Ethan!\n\
             I love coding! 1\n\
             I love coding! 2\n\
             I love coding! 3\n\
             I love coding! 4\n\
             I love coding! 5\n"
        );
    }

    #[test]
    fn test_math_sample() {
        assert_eq!(
            run("math"),
            "🧮 Let's do some math!\n\
             5 + 3 = 8\n\
             10 * 2 = 20\n\
             15 / 3 = 15 / 3\n\
             🎯 Math is awesome!\n\
             1 x 2 = 2\n\
             2 x 2 = 4\n\
             3 x 2 = 6\n\
             4 x 2 = 8\n\
             5 x 2 = 10\n"
        );
    }

    #[test]
    fn test_story_sample() {
        let output = run("story");
        assert!(output.contains("Day 1: Ethan coded amazing projects!\n"));
        assert!(output.contains("Day 3: Ethan coded amazing projects!\n"));
        assert!(!output.contains("Day 4"));
        assert_eq!(output.lines().count(), 9);
    }
}
