mod common;
use common::*;
use playground::sample;

#[test]
fn test_every_sample_runs() {
    for name in sample::names() {
        let outcome = exec(sample::sample(name));
        assert!(outcome.is_ok(), "{}: {:?}", name, outcome.error());
        assert!(!outcome.output().is_empty(), "{}", name);
    }
}

#[test]
fn test_hello_sample() {
    assert_eq!(
        exec(sample::sample("hello")).output(),
        "🌍 Hello, World!\n🎉 Welcome to Python!\n✨ Let's code something amazing!\n"
    );
}

#[test]
fn test_game_sample() {
    assert_eq!(
        exec(sample::sample("game")).output(),
        "🎲 Welcome to the Number Game!\n\
         🤔 I'm thinking of a number...\n\
         Your guess: 5\n\
         🎯 The number was 7\n\
         Try again next time!\n"
    );
}
