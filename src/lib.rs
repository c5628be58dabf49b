//! # Python Playground
//!
//! A beginner's Python panel as it appears on a kids' coding page, plus
//! the page's arcade minigames, rebuilt for the terminal.
//!
//! The panel understands a small, forgiving subset of Python: prints,
//! simple assignments, one level of `if`/`else`, `for` over `range`, and
//! `randint` and `input` stand-ins. Anything it doesn't recognize is
//! skipped quietly rather than reported.
//! ```text
//! Python Playground
//! Click "Run Code" to see your Python magic! ✨
//! >>> █
//! ```
//!
//! Use the library directly by handing source text to a runtime.
//! ```
//! use playground::mach::Runtime;
//! let mut runtime: Runtime = Runtime::default();
//! let outcome = runtime.run("x = 4\nprint(f\"{x+1}\")");
//! assert_eq!(outcome.output(), "5\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod arcade;
pub mod lang;
pub mod mach;
pub mod sample;
