/// ID types for User API entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Sequential, starting at 1. Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// First ID handed out by an empty store
    pub const FIRST: UserId = UserId(1);

    /// Create a user ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The ID following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Parse a path segment made only of ASCII digits
    ///
    /// Signs, whitespace, empty input and values that overflow `u64` are
    /// rejected.
    pub fn parse_path_segment(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse::<u64>().ok().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
