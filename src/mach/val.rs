use crate::lang::{read_integer_prefix, read_number};
use std::rc::Rc;

/// A variable's value. Variables hold text or numbers and change type
/// freely on reassignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    String(Rc<str>),
    Number(f64),
}

impl Val {
    /// Equality that reads text as a number when the other side is one.
    pub fn loose_eq(&self, other: &Val) -> bool {
        use Val::*;
        match (self, other) {
            (String(a), String(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (Number(n), String(s)) | (String(s), Number(n)) => {
                read_number(s).map_or(false, |m| m == *n)
            }
        }
    }

    /// The leading integer of the value's printed form; NaN when there is none.
    pub fn integer(&self) -> f64 {
        let n = match self {
            Val::String(s) => read_integer_prefix(s),
            Val::Number(_) => read_integer_prefix(&self.to_string()),
        };
        n.unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

/// Prints a number the way a browser does: whole numbers have no
/// fraction, very large and very small magnitudes use an exponent.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let s = format!("{:e}", n);
        return match s.find('e') {
            Some(e) if !s[e + 1..].starts_with('-') => format!("{}e+{}", &s[..e], &s[e + 1..]),
            _ => s,
        };
    }
    if n.fract() == 0.0 {
        return format!("{:.0}", n);
    }
    format!("{}", n)
}
