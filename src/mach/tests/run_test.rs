use super::*;
use crate::mach::{INPUT_ANSWERS, NO_OUTPUT};

#[test]
fn test_print_literal() {
    assert_eq!(output("print(\"Hello\")"), "Hello\n");
}

#[test]
fn test_print_variable() {
    assert_eq!(output("x = 5\nprint(x)"), "5\n");
    assert_eq!(output("x = 'five'\nprint(x)"), "five\n");
    assert_eq!(output("x = 2.50\nprint(x)"), "2.5\n");
    assert_eq!(output("print(nothing)"), "nothing\n");
}

#[test]
fn test_reassignment_changes_type() {
    assert_eq!(output("x = 5\nx = \"five\"\nprint(x)"), "five\n");
}

#[test]
fn test_fstring() {
    assert_eq!(output("x = 4\nprint(f\"{x+1}\")"), "5\n");
    assert_eq!(output("name = \"Ethan\"\nprint(f'Hi {name}!')"), "Hi Ethan!\n");
    assert_eq!(output("print(f\"5 + 3 = {5 + 3}\")"), "5 + 3 = 8\n");
    assert_eq!(output("print(f\"15 / 3 = {15 / 3}\")"), "15 / 3 = 15 / 3\n");
    assert_eq!(output("print(f\"{missing}\")"), "missing\n");
}

#[test]
fn test_concatenation() {
    assert_eq!(
        output("name = \"Ada\"\nprint(\"Hello, \" + name + \"!\")"),
        "Hello, Ada!\n"
    );
}

#[test]
fn test_only_comments_gives_canned_message() {
    let outcome = run("# nothing here\n\n   \n# still nothing");
    assert!(outcome.is_ok());
    assert_eq!(outcome.output(), "");
    assert_eq!(outcome.body(), NO_OUTPUT);
}

#[test]
fn test_stray_symbol_is_silent() {
    let outcome = run("@");
    assert!(outcome.is_ok());
    assert_eq!(outcome.body(), NO_OUTPUT);
}

#[test]
fn test_runs_are_independent() {
    let mut r = runtime();
    let first = r.run("x = 1\nprint(x)");
    let second = r.run("print(x)");
    assert_eq!(first.output(), "1\n");
    assert_eq!(second.output(), "x\n");
    let again = r.run("x = 1\nprint(x)");
    assert_eq!(first, again);
}

#[test]
fn test_imports_do_not_leak_between_runs() {
    let mut r = runtime();
    let imported = r.run("from random import randint\nn = randint(4, 4)\nprint(n)");
    assert_eq!(imported.output(), "4\n");
    let not_imported = r.run("n = randint(4, 4)\nprint(n)");
    assert_eq!(not_imported.output(), "randint(4, 4)\n");
}

#[test]
fn test_randint_range() {
    let mut r = runtime();
    for _ in 0..50 {
        let outcome = r.run("from random import randint\nn = randint(1, 6)\nprint(n)");
        let n: f64 = outcome.output().trim_end().parse().unwrap();
        assert!((1.0..=6.0).contains(&n));
    }
}

#[test]
fn test_randint_reversed_bounds_still_draws() {
    let mut r = runtime();
    for _ in 0..50 {
        let outcome = r.run("from random import randint\nn = randint(5, 1)\nprint(n)");
        assert!(outcome.is_ok());
        let n: i64 = outcome.output().trim_end().parse().unwrap();
        assert!((2..=5).contains(&n));
    }
}

#[test]
fn test_simulated_input() {
    let outcome = run("guess = input(\"Pick a number:\")\nprint(guess)");
    let lines: Vec<&str> = outcome.output().lines().collect();
    assert_eq!(lines.len(), 2);
    let answer = lines[0].strip_prefix("Pick a number: ").unwrap();
    assert_eq!(answer, lines[1]);
    let n: i64 = answer.parse().unwrap();
    assert!(INPUT_ANSWERS.contains(&n));
}

#[test]
fn test_same_seed_same_outcome() {
    let source = "from random import randint\na = randint(1, 100)\nb = input(\"b?\")\nprint(a)";
    assert_eq!(run(source), run(source));
}

#[test]
fn test_trace() {
    let mut r = runtime();
    r.set_trace(true);
    let outcome = r.run("x = 1\n# skip\nif x == 1:\n    print(x)\nprint(\"end\")");
    assert_eq!(outcome.trace(), &[1, 3, 4, 5]);
    r.set_trace(false);
    assert!(r.run("print(1)").trace().is_empty());
}
