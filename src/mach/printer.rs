use super::{format_number, Val, Var};
use crate::lang::ast::{Operand, Placeholder, Printable, Segment};

/// Turns the content of a `print(...)` into one line of text.
///
/// Nothing here fails. Names that aren't bound print as written and
/// arithmetic on text that isn't an integer prints `NaN`.
pub struct Printer<'a> {
    var: &'a Var,
}

impl<'a> Printer<'a> {
    pub fn new(var: &'a Var) -> Printer<'a> {
        Printer { var }
    }

    pub fn line(&self, printable: &Printable) -> String {
        match printable {
            Printable::Format(segments) => segments.iter().map(|s| self.segment(s)).collect(),
            Printable::Concat(operands) => operands.iter().map(|o| self.operand(o)).collect(),
            Printable::Literal(s) => s.to_string(),
            Printable::Name(name) => self.var.fetch_or_text(name).to_string(),
        }
    }

    fn segment(&self, segment: &Segment) -> String {
        match segment {
            Segment::Text(s) => s.to_string(),
            Segment::Placeholder(p) => self.placeholder(p),
        }
    }

    fn placeholder(&self, placeholder: &Placeholder) -> String {
        match placeholder {
            Placeholder::Arithmetic(op, lhs, rhs) => {
                let lhs = self.var.fetch_or_text(lhs).integer();
                let rhs = Val::String(rhs.clone()).integer();
                format_number(op.apply(lhs, rhs))
            }
            Placeholder::Name(name) => self.var.fetch_or_text(name).to_string(),
        }
    }

    fn operand(&self, operand: &Operand) -> String {
        match operand {
            Operand::Literal(s) => s.to_string(),
            Operand::Name(name) => self.var.fetch_or_text(name).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ast::Operator;
    use std::rc::Rc;

    fn vars(pairs: &[(&str, Val)]) -> Var {
        let mut var = Var::new();
        for (name, val) in pairs {
            let name: Rc<str> = (*name).into();
            var.store(&name, val.clone());
        }
        var
    }

    #[test]
    fn test_placeholder_arithmetic() {
        let var = vars(&[("x", Val::Number(4.0)), ("zero", Val::Number(0.0))]);
        let p = Printer::new(&var);
        let arith = |op, lhs: &str, rhs: &str| {
            p.placeholder(&Placeholder::Arithmetic(op, lhs.into(), rhs.into()))
        };
        assert_eq!(arith(Operator::Add, "x", "1"), "5");
        assert_eq!(arith(Operator::Subtract, "x", "10"), "-6");
        assert_eq!(arith(Operator::Multiply, "10", "2"), "20");
        assert_eq!(arith(Operator::Add, "zero", "1"), "1");
        assert_eq!(arith(Operator::Add, "y", "1"), "NaN");
        assert_eq!(arith(Operator::Multiply, "x", "x"), "NaN");
    }

    #[test]
    fn test_names_fall_back_to_text() {
        let var = vars(&[("name", Val::String("Ethan".into()))]);
        let p = Printer::new(&var);
        assert_eq!(p.line(&Printable::Name("name".into())), "Ethan");
        assert_eq!(p.line(&Printable::Name("nobody".into())), "nobody");
        assert_eq!(
            p.line(&Printable::Concat(vec![
                Operand::Literal("Hi ".into()),
                Operand::Name("name".into()),
                Operand::Name("!".into()),
            ])),
            "Hi Ethan!"
        );
        assert_eq!(
            p.line(&Printable::Format(vec![
                Segment::Text("15 / 3 = ".into()),
                Segment::Placeholder(Placeholder::Name("15 / 3".into())),
            ])),
            "15 / 3 = 15 / 3"
        );
    }
}
