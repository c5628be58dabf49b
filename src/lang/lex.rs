pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A cursor over one trimmed line.
///
/// Each method consumes a run of one kind of text and reports what it
/// consumed. A method that matches nothing leaves the cursor where it was.
pub struct Scanner<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Scanner<'a> {
        Scanner { s, pos: 0 }
    }

    pub fn at(s: &'a str, pos: usize) -> Scanner<'a> {
        Scanner { s, pos }
    }

    pub fn rest(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn run(&mut self, f: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !f(c)).unwrap_or_else(|| rest.len());
        self.pos += len;
        &rest[..len]
    }

    pub fn whitespace(&mut self) -> usize {
        self.run(char::is_whitespace).len()
    }

    pub fn word(&mut self) -> Option<&'a str> {
        let word = self.run(is_word_char);
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    pub fn digits(&mut self) -> Option<&'a str> {
        let digits = self.run(|c| c.is_ascii_digit());
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }

    pub fn literal(&mut self, lit: &str) -> bool {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }
}

/// Reads all of `s` as a number the way a browser's `Number()` does:
/// surrounding whitespace is ignored, empty text is zero, and `0x`, `0o`,
/// `0b` integers and `Infinity` are accepted. `None` stands for NaN.
pub fn read_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    if let Some((digits, radix)) = radix_digits(s) {
        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }
    let unsigned = s
        .strip_prefix('+')
        .or_else(|| s.strip_prefix('-'))
        .unwrap_or(s);
    if unsigned == "Infinity" {
        if s.starts_with('-') {
            return Some(f64::NEG_INFINITY);
        }
        return Some(f64::INFINITY);
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Reads the leading integer of `s` the way `parseInt()` does. Leading
/// whitespace and a sign are allowed, `0x` switches to hex, and anything
/// after the digits is ignored.
pub fn read_integer_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, s) = if let Some(s) = s.strip_prefix('-') {
        (true, s)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or_else(|| digits.len());
    if end == 0 {
        return None;
    }
    let mut value = 0.0;
    for c in digits[..end].chars() {
        value = value * radix as f64 + c.to_digit(radix)? as f64;
    }
    Some(if negative { -value } else { value })
}

/// The number an assignment stores for text `read_number` accepts.
/// Radix-prefixed integers keep only their leading `0`.
pub fn number_literal(s: &str) -> Option<f64> {
    let n = read_number(s)?;
    if radix_digits(s.trim()).is_some() {
        Some(0.0)
    } else {
        Some(n)
    }
}

fn radix_digits(s: &str) -> Option<(&str, u32)> {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in PREFIXES.iter() {
        if let Some(digits) = s.strip_prefix(*prefix) {
            return Some((digits, *radix));
        }
    }
    None
}

/// Strips a matching pair of `quote` characters. A lone quote
/// character counts as an empty literal.
pub fn unquote(s: &str, quote: char) -> Option<&str> {
    if !s.starts_with(quote) || !s.ends_with(quote) {
        return None;
    }
    if s.len() < 2 {
        return Some("");
    }
    Some(&s[1..s.len() - 1])
}
