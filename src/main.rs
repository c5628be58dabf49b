//! # Python Playground
//!
//! A terminal edition of the playground panel. Type code, then `:run`.
//!

mod term;

fn main() {
    term::main()
}
