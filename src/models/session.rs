use std::fmt;
use std::str::FromStr;

use crate::error::CoachError;

/// Identifier of one conversation session: an 8-digit, date-like string
/// such as `20251222`.
///
/// Only the shape is checked; `20251399` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn parse(input: &str) -> Result<Self, CoachError> {
        if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(CoachError::InvalidSessionId(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format as `YYYY-MM-DD` for document titles
    pub fn display_date(&self) -> String {
        format!("{}-{}-{}", &self.0[..4], &self.0[4..6], &self.0[6..])
    }
}

impl FromStr for SessionId {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
