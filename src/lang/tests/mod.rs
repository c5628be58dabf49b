use super::ast::*;
use super::*;


fn parse_str(s: &str) -> Vec<Statement> {
    parse(s)
}
