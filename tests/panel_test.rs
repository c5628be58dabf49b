mod common;
use common::*;
use playground::lang::ErrorCode;
use playground::mach::{ERROR_HEADER, NO_OUTPUT, SUCCESS_HEADER};

#[test]
fn test_hello() {
    assert_eq!(panel("print(\"Hello\")"), "🎉 Python Output:\nHello\n");
}

#[test]
fn test_comments_only() {
    assert_eq!(
        panel("# nothing to see\n\n   \n# still nothing"),
        format!("{}\n{}", SUCCESS_HEADER, NO_OUTPUT)
    );
}

#[test]
fn test_stray_symbols_are_ignored() {
    let outcome = exec("@@@\n)(\nprint\n");
    assert!(outcome.is_ok());
    assert_eq!(outcome.output(), "");
    assert_eq!(outcome.body(), NO_OUTPUT);
}

#[test]
fn test_if_else() {
    let source = "a = 3\nb = {}\nif a == b:\n    print(\"yes\")\nelse:\n    print(\"no\")";
    assert_eq!(exec(&source.replace("{}", "3")).output(), "yes\n");
    assert_eq!(exec(&source.replace("{}", "4")).output(), "no\n");
}

#[test]
fn test_arithmetic_placeholder() {
    assert_eq!(exec("x = 4\nprint(f\"{x+1}\")").output(), "5\n");
}

#[test]
fn test_runs_are_independent() {
    let mut r = runtime();
    let source = "name = \"Ada\"\nprint(f\"Hi {name}\")";
    let first = r.run(source);
    let second = r.run(source);
    assert_eq!(first, second);
    let third = r.run("print(name)");
    assert_eq!(third.output(), "name\n");
}

#[test]
fn test_error_replaces_output() {
    let source = "print(\"before\")\nfor i in range(1, 5, 0):\n    print(i)\nprint(\"after\")";
    let outcome = exec(source);
    assert_eq!(outcome.output(), "before\n");
    let error = outcome.error().unwrap();
    assert!(error.is(ErrorCode::ValueError));
    assert_eq!(error.line_number(), Some(2));
    assert_eq!(
        outcome.panel(),
        format!(
            "{}\nValueError on line 2: range() arg 3 must not be zero",
            ERROR_HEADER
        )
    );
}


