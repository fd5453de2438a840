//! Merge policy configuration
//!
//! A [`MergeConfig`] can be built in code or deserialized from a caller's own
//! configuration file:
//!
//! ```toml
//! [merge]
//! priority = "failure"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RemoteResultError;

/// Which state wins when a merged sequence holds several non-success states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePriority {
    /// `Initial > Pending > Failure > Success`
    #[default]
    Pending,
    /// `Failure > Initial > Pending > Success`
    Failure,
}

impl MergePriority {
    pub const fn as_str(self) -> &'static str {
        match self {
            MergePriority::Pending => "pending",
            MergePriority::Failure => "failure",
        }
    }
}

impl fmt::Display for MergePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergePriority {
    type Err = RemoteResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(MergePriority::Pending),
            "failure" => Ok(MergePriority::Failure),
            _ => Err(RemoteResultError::invalid_priority(s)),
        }
    }
}

/// Options for [`merge_with_config`](super::merge_with_config)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub priority: MergePriority,
}

impl MergeConfig {
    pub fn new(priority: MergePriority) -> Self {
        Self { priority }
    }

    /// `Initial` and `Pending` win over failures
    pub fn pending_first() -> Self {
        Self::new(MergePriority::Pending)
    }

    /// Any failure wins over `Initial` and `Pending`
    pub fn failure_first() -> Self {
        Self::new(MergePriority::Failure)
    }

    pub fn with_priority(mut self, priority: MergePriority) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority_is_pending() {
        assert_eq!(MergeConfig::default().priority, MergePriority::Pending);
        assert_eq!(MergeConfig::default(), MergeConfig::pending_first());
    }

    #[test]
    fn test_builders() {
        assert_eq!(MergeConfig::failure_first().priority, MergePriority::Failure);
        assert_eq!(
            MergeConfig::pending_first().with_priority(MergePriority::Failure),
            MergeConfig::failure_first()
        );
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("pending".parse::<MergePriority>(), Ok(MergePriority::Pending));
        assert_eq!(" Failure ".parse::<MergePriority>(), Ok(MergePriority::Failure));

        let err = "loudest".parse::<MergePriority>().unwrap_err();
        assert_eq!(err, RemoteResultError::invalid_priority("loudest"));
    }

    #[test]
    fn test_priority_display_round_trips() {
        for priority in [MergePriority::Pending, MergePriority::Failure] {
            assert_eq!(priority.to_string().parse::<MergePriority>(), Ok(priority));
        }
    }
}
