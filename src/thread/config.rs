use serde::{Deserialize, Serialize};

/// Initial orientation of a thread's collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadConfig {
    /// Whether new top-level entries are inserted at the head (newest first)
    pub entries_reversed: bool,
    /// Whether new sub-entries are inserted at the head of their entry's list
    pub sub_entries_reversed: bool,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            entries_reversed: true,      // newest entry first
            sub_entries_reversed: false, // newest sub-entry last
        }
    }
}
