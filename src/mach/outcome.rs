use crate::lang::{Error, LineNumber};
use std::borrow::Cow;

pub const SUCCESS_HEADER: &str = "🎉 Python Output:";
pub const ERROR_HEADER: &str = "❌ Oops! There's an error:";
pub const NO_OUTPUT: &str = "✨ Code executed successfully! (No output to display)";
pub const IDLE: &str = "Click \"Run Code\" to see your Python magic! ✨";

/// ## Result of one run
///
/// Output appended before a fault is kept here, but the panel shows
/// only the error.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    output: String,
    error: Option<Error>,
    trace: Vec<LineNumber>,
}

impl Outcome {
    pub fn new(output: String, error: Option<Error>, trace: Vec<LineNumber>) -> Outcome {
        Outcome {
            output,
            error,
            trace,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Line numbers of executed statements, when tracing was on.
    pub fn trace(&self) -> &[LineNumber] {
        &self.trace
    }

    pub fn header(&self) -> &'static str {
        if self.is_ok() {
            SUCCESS_HEADER
        } else {
            ERROR_HEADER
        }
    }

    pub fn body(&self) -> Cow<'_, str> {
        match &self.error {
            Some(error) => Cow::Owned(error.to_string()),
            None if self.output.is_empty() => Cow::Borrowed(NO_OUTPUT),
            None => Cow::Borrowed(&self.output),
        }
    }

    pub fn panel(&self) -> String {
        format!("{}\n{}", self.header(), self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_panel() {
        let ok = Outcome::new("Hello\n".to_string(), None, vec![]);
        assert_eq!(ok.panel(), "🎉 Python Output:\nHello\n");
        let empty = Outcome::new(String::new(), None, vec![]);
        assert_eq!(empty.body(), NO_OUTPUT);
        let failed = Outcome::new(
            "partial\n".to_string(),
            Some(error!(ValueError, 2; "range() arg 3 must not be zero")),
            vec![],
        );
        assert_eq!(failed.output(), "partial\n");
        assert_eq!(
            failed.panel(),
            "❌ Oops! There's an error:\nValueError on line 2: range() arg 3 must not be zero"
        );
    }
}
