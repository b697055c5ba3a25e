use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;

/// Where in the source an error value was built. Rendered as `[file:line:column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl ErrorLocation {
    pub const fn from(site: &'static Location<'static>) -> Self {
        Self {
            file: site.file(),
            line: site.line(),
            column: site.column(),
        }
    }

    /// Captures the call site. Inside a `#[track_caller]` constructor this is
    /// the code that asked for the error, not the constructor.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl Display for ErrorLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let ErrorLocation { file, line, column } = self;
        write!(f, "[{file}:{line}:{column}]")
    }
}
