/*!
## Rust Machine Module

This Rust module runs parsed snippets and formats what they print.

*/

mod function;
mod outcome;
mod printer;
mod runtime;
mod val;
mod var;

pub use function::Function;
pub use function::Imports;
pub use function::INPUT_ANSWERS;
pub use outcome::Outcome;
pub use outcome::{ERROR_HEADER, IDLE, NO_OUTPUT, SUCCESS_HEADER};
pub use printer::Printer;
pub use runtime::Runtime;
pub use runtime::MAX_ITERATIONS;
pub use val::format_number;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
