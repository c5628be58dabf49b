use super::LineNumber;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Import(LineNumber, Rc<str>, Vec<Rc<str>>),
    Assign(LineNumber, Rc<str>, Expression),
    If(LineNumber, Condition, Vec<Statement>, Vec<Statement>),
    For(LineNumber, Rc<str>, Vec<RangeArg>, Vec<Statement>),
    Print(LineNumber, Printable),
}

impl Statement {
    pub fn line_number(&self) -> LineNumber {
        use Statement::*;
        match self {
            Import(ln, ..) | Assign(ln, ..) | If(ln, ..) | For(ln, ..) | Print(ln, ..) => *ln,
        }
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// `randint(min, max)`, with the source text to store when
    /// `randint` was never imported.
    RandInt(i64, i64, Rc<str>),
    Input(Rc<str>),
    String(Rc<str>),
    Number(f64),
    Raw(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Condition {
    Equal(Rc<str>, Rc<str>),
    Unsupported(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum RangeArg {
    Integer(i64),
    Name(Rc<str>),
}

/// Content of a `print(...)`.
#[derive(Debug, PartialEq, Clone)]
pub enum Printable {
    Format(Vec<Segment>),
    Concat(Vec<Operand>),
    Literal(Rc<str>),
    /// A bound variable prints its value, anything else prints as written.
    Name(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Segment {
    Text(Rc<str>),
    Placeholder(Placeholder),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Placeholder {
    Arithmetic(Operator, Rc<str>, Rc<str>),
    Name(Rc<str>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Literal(Rc<str>),
    Name(Rc<str>),
}
