//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stage, assigned by the storage collaborator.
///
/// Identifiers are sequential integers starting at 1. Clients treat them as
/// opaque values taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(i64);

impl StageId {
    /// Creates a StageId from a raw storage value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw storage value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
