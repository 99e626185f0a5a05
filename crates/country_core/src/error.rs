use std::fmt;

/// User-facing lookup errors. Each maps to one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    EmptyInput,
    NotFound,
    TransportOrParseFailure,
}

impl LookupError {
    pub fn message(self) -> &'static str {
        match self {
            LookupError::EmptyInput => "The input field cannot be empty",
            LookupError::NotFound => "No matching countries found.",
            LookupError::TransportOrParseFailure => {
                "Something went wrong. Please try again later."
            }
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LookupError {}
