use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Errors raised deep in the evaluator don't know their line.
    /// The runtime attaches it on the way out; the first line wins.
    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number.or(Some(line)),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    TypeError = 2,
    ValueError = 3,
    OverflowError = 4,
    KeyboardInterrupt = 5,
    NameError = 6,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "TypeError",
            3 => "ValueError",
            4 => "OverflowError",
            5 => "KeyboardInterrupt",
            6 => "NameError",
            51 => "InternalError",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" on line {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!(": {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "Error {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(NameError).to_string(), "NameError");
        assert_eq!(error!(ValueError, 3).to_string(), "ValueError on line 3");
        assert_eq!(
            error!(TypeError; "bad operand").to_string(),
            "TypeError: bad operand"
        );
        assert_eq!(
            error!(OverflowError, 12; "loop too long").to_string(),
            "OverflowError on line 12: loop too long"
        );
    }

    #[test]
    fn test_first_line_number_wins() {
        let e = error!(ValueError, 4).in_line_number(9);
        assert_eq!(e.line_number(), Some(4));
        assert!(e.is(ErrorCode::ValueError));
        assert!(!e.is(ErrorCode::TypeError));
    }
}
