//! Stable identifiers for lists and tasks.
//!
//! # Responsibility
//! - Generate collision-resistant ids for every created list and task.
//! - Convert ids to/from the string form used by the UI bridge.
//!
//! # Invariants
//! - Generated ids are random v4 UUIDs, never derived from wall-clock time,
//!   so two entities created in the same instant still get distinct ids.
//! - The nil UUID is never a valid id.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of one to-do list, unique within the list collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(Uuid);

/// Identifier of one task, unique within its parent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl ListId {
    /// Generates a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl TaskId {
    /// Generates a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for ListId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = IdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_non_nil(value).map(Self)
    }
}

impl FromStr for TaskId {
    type Err = IdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_non_nil(value).map(Self)
    }
}

/// Error for id strings received from outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    /// Input is blank after trim.
    Empty,
    /// Input is not a UUID.
    Malformed(String),
    /// Input is the nil UUID.
    Nil,
}

impl Display for IdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "id must not be empty"),
            Self::Malformed(value) => write!(f, "id is not a valid uuid: {value}"),
            Self::Nil => write!(f, "id must not be the nil uuid"),
        }
    }
}

impl Error for IdParseError {}

fn parse_non_nil(value: &str) -> Result<Uuid, IdParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IdParseError::Empty);
    }
    let uuid =
        Uuid::parse_str(trimmed).map_err(|_| IdParseError::Malformed(trimmed.to_string()))?;
    if uuid.is_nil() {
        return Err(IdParseError::Nil);
    }
    Ok(uuid)
}

#[cfg(test)]
mod tests {
    use super::{IdParseError, ListId, TaskId};
    use std::collections::HashSet;

    #[test]
    fn generated_ids_do_not_collide_in_a_tight_loop() {
        let ids: HashSet<TaskId> = (0..1_000).map(|_| TaskId::generate()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn display_and_parse_agree() {
        let id = ListId::generate();
        let parsed: ListId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_blank_malformed_and_nil() {
        assert_eq!("  ".parse::<ListId>().unwrap_err(), IdParseError::Empty);
        assert!(matches!(
            "1700000000000".parse::<TaskId>().unwrap_err(),
            IdParseError::Malformed(_)
        ));
        assert_eq!(
            "00000000-0000-0000-0000-000000000000"
                .parse::<TaskId>()
                .unwrap_err(),
            IdParseError::Nil
        );
    }
}
