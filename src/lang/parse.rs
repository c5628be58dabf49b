use super::lex::{is_word_char, number_literal, unquote, Scanner};
use super::{ast::*, LineNumber};
use std::ops::Range;
use std::rc::Rc;

/// A line belongs to the block above it when it starts with this.
const INDENT: &str = "    ";

pub fn parse(source: &str) -> Vec<Statement> {
    Parser::new(source).collect()
}

/// Yields statements in source order, one line (or block) at a time.
/// Lines it doesn't understand are skipped.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> Iterator for Parser<'a> {
    type Item = Statement;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.lines.len() {
            let line_number = self.index + 1;
            let line = self.lines[self.index].trim();
            self.index += 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(statement) = self.statement(line_number, line) {
                return Some(statement);
            }
        }
        None
    }
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Parser<'a> {
        Parser {
            lines: source.split('\n').collect(),
            index: 0,
        }
    }

    fn statement(&mut self, line_number: LineNumber, line: &str) -> Option<Statement> {
        if line.starts_with("from ") && line.contains(" import ") {
            return import(line).map(|(module, names)| Statement::Import(line_number, module, names));
        }
        if let Some((name, rhs)) = assignment(line) {
            return Some(Statement::Assign(line_number, name.into(), expression(rhs)));
        }
        if let Some(condition) = if_header(line) {
            return Some(self.if_block(line_number, condition));
        }
        if let Some((name, args)) = for_header(line) {
            // A header with arguments we can't loop over is dropped and
            // its body lines are read as ordinary lines.
            let args = range_args(args)?;
            let end = self.block_end(self.index);
            let body = self.block(self.index..end);
            self.index = end;
            return Some(Statement::For(line_number, name.into(), args, body));
        }
        print(line).map(|p| Statement::Print(line_number, p))
    }

    fn if_block(&mut self, line_number: LineNumber, condition: Condition) -> Statement {
        let mut else_index = None;
        let mut stop = self.lines.len();
        for index in self.index..self.lines.len() {
            let raw = self.lines[index];
            let trimmed = raw.trim();
            if trimmed.starts_with("else:") {
                else_index = Some(index);
                stop = index;
                break;
            }
            if !trimmed.is_empty() && !raw.starts_with(INDENT) {
                stop = index;
                break;
            }
        }
        let then_block = self.block(self.index..stop);
        let else_block = match else_index {
            Some(index) => {
                let end = self.block_end(index + 1);
                let block = self.block(index + 1..end);
                self.index = end;
                block
            }
            None => {
                self.index = stop;
                vec![]
            }
        };
        Statement::If(line_number, condition, then_block, else_block)
    }

    /// Index of the first non-blank line at or after `from` that
    /// isn't indented.
    fn block_end(&self, from: usize) -> usize {
        (from..self.lines.len())
            .find(|&index| {
                let raw = self.lines[index];
                !raw.trim().is_empty() && !raw.starts_with(INDENT)
            })
            .unwrap_or_else(|| self.lines.len())
    }

    /// Block bodies only print. Anything else inside a block is ignored.
    fn block(&self, range: Range<usize>) -> Vec<Statement> {
        let mut statements = vec![];
        for index in range {
            let raw = self.lines[index];
            if !raw.starts_with(INDENT) {
                continue;
            }
            let line = raw.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some(p) = print(line) {
                statements.push(Statement::Print(index + 1, p));
            }
        }
        statements
    }
}

fn import(line: &str) -> Option<(Rc<str>, Vec<Rc<str>>)> {
    let mut sc = Scanner::new(line);
    if !sc.literal("from") || sc.whitespace() == 0 {
        return None;
    }
    let module = sc.word()?;
    if sc.whitespace() == 0 || !sc.literal("import") || sc.whitespace() == 0 {
        return None;
    }
    let names = sc.rest();
    if names.is_empty() {
        return None;
    }
    Some((
        module.into(),
        names.split(',').map(|name| name.trim().into()).collect(),
    ))
}

fn assignment(line: &str) -> Option<(&str, &str)> {
    let mut sc = Scanner::new(line);
    let name = sc.word()?;
    sc.whitespace();
    if !sc.literal("=") {
        return None;
    }
    sc.whitespace();
    let rhs = sc.rest();
    if rhs.is_empty() {
        return None;
    }
    Some((name, rhs.trim()))
}

fn expression(rhs: &str) -> Expression {
    if rhs.contains("randint(") {
        return randint(rhs).unwrap_or_else(|| Expression::Raw(rhs.into()));
    }
    if rhs.contains("input(") {
        return match input_prompt(rhs) {
            Some(prompt) => Expression::Input(prompt.into()),
            None => Expression::Raw(rhs.into()),
        };
    }
    if let Some(s) = unquote(rhs, '"').or_else(|| unquote(rhs, '\'')) {
        return Expression::String(s.into());
    }
    if let Some(n) = number_literal(rhs) {
        return Expression::Number(n);
    }
    Expression::Raw(rhs.into())
}

/// `randint(<digits>,<spaces><digits>)` anywhere in the text.
fn randint(rhs: &str) -> Option<Expression> {
    for (pos, _) in rhs.match_indices("randint(") {
        let mut sc = Scanner::at(rhs, pos + "randint(".len());
        let min = match sc.digits() {
            Some(digits) => digits,
            None => continue,
        };
        if !sc.literal(",") {
            continue;
        }
        sc.whitespace();
        let max = match sc.digits() {
            Some(digits) => digits,
            None => continue,
        };
        if !sc.literal(")") {
            continue;
        }
        if let (Ok(min), Ok(max)) = (min.parse::<i64>(), max.parse::<i64>()) {
            return Some(Expression::RandInt(min, max, rhs.into()));
        }
    }
    None
}

/// The prompt of the first `input("...")`, running to the last `")`.
fn input_prompt(rhs: &str) -> Option<&str> {
    let start = rhs.find("input(\"")? + "input(\"".len();
    let rest = &rhs[start..];
    match rest.rfind("\")") {
        Some(end) if end > 0 => Some(&rest[..end]),
        _ => None,
    }
}

fn if_header(line: &str) -> Option<Condition> {
    let after = line.strip_prefix("if")?;
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    let colon = after.rfind(':')?;
    if colon < 2 {
        return None;
    }
    Some(condition(after[..colon].trim_start()))
}

/// Looks for the first `<word> == <word>` in the condition text.
fn condition(text: &str) -> Condition {
    for (pos, _) in text.char_indices() {
        let mut sc = Scanner::at(text, pos);
        let lhs = match sc.word() {
            Some(word) => word,
            None => continue,
        };
        sc.whitespace();
        if !sc.literal("==") {
            continue;
        }
        sc.whitespace();
        if let Some(rhs) = sc.word() {
            return Condition::Equal(lhs.into(), rhs.into());
        }
    }
    Condition::Unsupported(text.into())
}

fn for_header(line: &str) -> Option<(&str, &str)> {
    let mut sc = Scanner::new(line);
    if !sc.literal("for") || sc.whitespace() == 0 {
        return None;
    }
    let name = sc.word()?;
    if sc.whitespace() == 0 || !sc.literal("in") || sc.whitespace() == 0 {
        return None;
    }
    if !sc.literal("range") {
        return None;
    }
    sc.whitespace();
    if !sc.literal("(") {
        return None;
    }
    let rest = sc.rest().strip_suffix(':')?.trim_end();
    let args = rest.strip_suffix(')')?;
    Some((name, args))
}

/// One to three arguments, each an integer or a bare name.
fn range_args(args: &str) -> Option<Vec<RangeArg>> {
    if args.trim().is_empty() {
        return None;
    }
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() > 3 {
        return None;
    }
    parts.into_iter().map(range_arg).collect()
}

fn range_arg(arg: &str) -> Option<RangeArg> {
    if let Ok(n) = arg.parse::<i64>() {
        return Some(RangeArg::Integer(n));
    }
    if !arg.is_empty() && arg.chars().all(is_word_char) {
        return Some(RangeArg::Name(arg.into()));
    }
    None
}

/// Content between the first `print(` and the last `)` after it.
fn print(line: &str) -> Option<Printable> {
    let start = line.find("print(")? + "print(".len();
    let rest = &line[start..];
    let content = match rest.rfind(')') {
        Some(end) if end > 0 => &rest[..end],
        _ => return None,
    };
    if content.starts_with("f\"") || content.starts_with("f'") {
        let mut chars = content.chars();
        chars.next();
        chars.next();
        chars.next_back();
        return Some(Printable::Format(segments(chars.as_str())));
    }
    if content.contains(" + ") {
        return Some(Printable::Concat(
            content.split(" + ").map(|part| operand(part.trim())).collect(),
        ));
    }
    if let Some(s) = unquote(content, '"') {
        return Some(Printable::Literal(s.into()));
    }
    Some(Printable::Name(content.into()))
}

fn operand(part: &str) -> Operand {
    match unquote(part, '"') {
        Some(s) => Operand::Literal(s.into()),
        None => Operand::Name(part.into()),
    }
}

/// Splits an f-string body into text and `{...}` placeholders. A `{`
/// without a non-empty `{...}` after it is plain text.
fn segments(body: &str) -> Vec<Segment> {
    let mut segments = vec![];
    let mut text = String::new();
    let mut rest = body;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                text.push_str(&rest[..open]);
                if !text.is_empty() {
                    segments.push(Segment::Text(text.as_str().into()));
                    text.clear();
                }
                segments.push(Segment::Placeholder(placeholder(&after[..close])));
                rest = &after[close + 1..];
            }
            Some(_) => {
                text.push_str(&rest[..=open]);
                rest = after;
            }
            None => break,
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        segments.push(Segment::Text(text.into()));
    }
    segments
}

fn placeholder(expr: &str) -> Placeholder {
    let expr = expr.trim();
    for &op in [Operator::Add, Operator::Subtract, Operator::Multiply].iter() {
        if expr.contains(op.symbol()) {
            let mut parts = expr.split(op.symbol());
            let lhs = parts.next().unwrap_or("").trim();
            let rhs = parts.next().unwrap_or("").trim();
            return Placeholder::Arithmetic(op, lhs.into(), rhs.into());
        }
    }
    Placeholder::Name(expr.into())
}
