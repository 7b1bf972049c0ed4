//! Error types for the translator and the conversion driver.
//!
//! `DriverError`'s `Display` output is the exact line shown to the user, so
//! `main` can print it verbatim.

use std::fmt;
use std::io;

use thiserror::Error;

/// Rejection of the definitions text by the translator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Raw error identifier for I/O failures we have no dedicated message for.
#[derive(Debug)]
pub enum IoCode {
    Os(i32),
    Kind(io::ErrorKind),
}

impl fmt::Display for IoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoCode::Os(code) => write!(f, "{code}"),
            IoCode::Kind(kind) => write!(f, "{kind:?}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Error: Could not find input file ./{path}")]
    InputNotFound { path: String },

    #[error("Permission denied: unable to open file ./{path} for reading")]
    InputPermissionDenied { path: String },

    #[error("Error: ./{path} is not a regular file")]
    InputNotAFile { path: String },

    #[error("Uncaught Error: {code}. Please file a bug report!")]
    InputUncaught { code: IoCode, source: io::Error },

    #[error("Syntax error in ./{path}: {source}")]
    Syntax { path: String, source: SyntaxError },

    #[error("Error: unable to move ./{from} to ./{to}: {source}")]
    Backup {
        from: String,
        to: String,
        source: io::Error,
    },

    #[error("Error: unable to write ./{path}: {source}")]
    Write { path: String, source: io::Error },
}

impl DriverError {
    /// Classify a failure to read the input file.
    pub fn from_read_error(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => DriverError::InputNotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::InputPermissionDenied { path },
            io::ErrorKind::IsADirectory => DriverError::InputNotAFile { path },
            kind => {
                let code = match err.raw_os_error() {
                    Some(code) => IoCode::Os(code),
                    None => IoCode::Kind(kind),
                };
                DriverError::InputUncaught { code, source: err }
            }
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::InputNotFound { .. }
            | DriverError::InputPermissionDenied { .. }
            | DriverError::InputNotAFile { .. }
            | DriverError::InputUncaught { .. } => 1,
            DriverError::Backup { .. } | DriverError::Write { .. } => 2,
            DriverError::Syntax { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(kind: io::ErrorKind) -> DriverError {
        DriverError::from_read_error("enums.defs", io::Error::from(kind))
    }

    #[test]
    fn read_errors_map_to_messages() {
        let cases = vec![
            (
                io::ErrorKind::NotFound,
                "Error: Could not find input file ./enums.defs",
            ),
            (
                io::ErrorKind::PermissionDenied,
                "Permission denied: unable to open file ./enums.defs for reading",
            ),
            (
                io::ErrorKind::IsADirectory,
                "Error: ./enums.defs is not a regular file",
            ),
            (
                io::ErrorKind::InvalidData,
                "Uncaught Error: InvalidData. Please file a bug report!",
            ),
        ];

        for (kind, expected) in cases {
            let err = classify(kind);
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn uncaught_prefers_raw_os_code() {
        // 16 == EBUSY on Linux; only the number matters here.
        let err = DriverError::from_read_error("enums.defs", io::Error::from_raw_os_error(16));
        assert!(matches!(err, DriverError::InputUncaught { .. }));
        assert_eq!(
            err.to_string(),
            "Uncaught Error: 16. Please file a bug report!"
        );
    }

    #[test]
    fn syntax_and_write_exit_codes() {
        let syntax = DriverError::Syntax {
            path: "enums.defs".into(),
            source: SyntaxError::new(2, 5, "expected '='"),
        };
        assert_eq!(syntax.exit_code(), 3);
        assert_eq!(
            syntax.to_string(),
            "Syntax error in ./enums.defs: line 2, column 5: expected '='"
        );

        let write = DriverError::Write {
            path: "Enums.elm".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(write.exit_code(), 2);
        assert!(write.to_string().starts_with("Error: unable to write ./Enums.elm: "));
    }
}
