use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{Todo, TodoId};

/// How the store hands out ids.
///
/// - `Rewind`: after every delete the counter is reset to the id of the last
///   remaining todo (or 0 once the list is empty). The next create therefore
///   reuses that id, so two live todos can share an id.
/// - `Monotonic`: ids only ever increase and are never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    #[default]
    Rewind,
    Monotonic,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rewind => "rewind",
            Self::Monotonic => "monotonic",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown id policy `{0}` (expected `rewind` or `monotonic`)")]
pub struct UnknownIdPolicy(String);

impl FromStr for IdPolicy {
    type Err = UnknownIdPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rewind" => Ok(Self::Rewind),
            "monotonic" => Ok(Self::Monotonic),
            _ => Err(UnknownIdPolicy(s.to_string())),
        }
    }
}

/// Sequential id counter starting at 1.
#[derive(Debug)]
pub(crate) struct IdAllocator {
    policy: IdPolicy,
    next: u64,
}

impl IdAllocator {
    pub(crate) fn new(policy: IdPolicy) -> Self {
        Self { policy, next: 1 }
    }

    pub(crate) fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub(crate) fn allocate(&mut self) -> TodoId {
        let id = TodoId(self.next);
        self.next += 1;
        id
    }

    /// Called after a todo has been removed; `remaining` is the list as it
    /// stands after the removal.
    pub(crate) fn after_delete(&mut self, remaining: &[Todo]) {
        if self.policy == IdPolicy::Rewind {
            self.next = remaining.last().map_or(0, |todo| todo.id.get());
        }
    }
}
