use super::{Column, LineNumber};

/// A compile or runtime failure with as much position as is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
}

/// Builds a `lang::Error`.
///
/// `error!(Code)`, `error!(Code, line)`, `error!(Code, ..&col)` and
/// `error!(Code, line, ..&col)`, each optionally followed by `; "MESSAGE"`.
#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::error!($err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::error!($err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::error!($err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::error!($err, ..$col).message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::error!($err, $line).in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::error!($err, $line).message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::error!($err, $line, ..$col).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Attach a line. A line that is already known is kept.
    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = line;
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        self.message = message.to_string();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    MissingToken,
    BadNumber,
    Overflow,
    TokenTooLong,
    TooManyLabels,
    OutOfMemory,
    UndefinedSprite,
    DivisionByZero,
    IllegalInstruction,
    CyclesExceeded,
    FileNotFound,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            MissingToken => "MISSING TOKEN",
            BadNumber => "BAD NUMBER",
            Overflow => "OVERFLOW",
            TokenTooLong => "TOKEN TOO LONG",
            TooManyLabels => "TOO MANY LABELS",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedSprite => "UNDEFINED SPRITE",
            DivisionByZero => "DIVISION BY ZERO",
            IllegalInstruction => "ILLEGAL INSTRUCTION",
            CyclesExceeded => "CYCLES EXCEEDED",
            FileNotFound => "FILE NOT FOUND",
            InternalError => "INTERNAL ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for Error {}

// SYNTAX ERROR IN 3 (4..6); EXPECTED THEN
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        let has_column = self.column != (0..0);
        if self.line_number.is_some() || has_column {
            write!(f, " IN")?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " {}", line_number)?;
        }
        if has_column {
            write!(f, " ({}..{})", self.column.start, self.column.end)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
