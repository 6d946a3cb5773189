//! Configuration parameters
//!
//! Rebalance behaviour and the record limits applied where text enters the
//! system.

/// Configuration for [`crate::BookTree::balance_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceConfig {
    /// Run the balance check first and leave balanced trees untouched
    pub skip_if_balanced: bool,
}

impl RebalanceConfig {
    /// Rebuild even when the tree is already balanced.
    pub fn always_rebuild() -> Self {
        Self {
            skip_if_balanced: false,
        }
    }
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            skip_if_balanced: true,
        }
    }
}

/// Maximum title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 127;

/// Maximum author length, in characters.
pub const MAX_AUTHOR_LENGTH: usize = 127;

/// Field limits enforced by [`crate::catalogue::parse_records`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLimits {
    /// Longest accepted title
    pub max_title_len: usize,

    /// Longest accepted author name
    pub max_author_len: usize,
}

impl Default for RecordLimits {
    fn default() -> Self {
        Self {
            max_title_len: MAX_TITLE_LENGTH,
            max_author_len: MAX_AUTHOR_LENGTH,
        }
    }
}
