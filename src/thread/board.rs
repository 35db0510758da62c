//! Command dispatch for a thread owned by a single host.
//!
//! A [`Board`] owns one [`EntryCollection`] and applies discrete commands
//! produced by a front end, one at a time. Each command returns an
//! [`Outcome`] telling the front end what changed and, for additions, which
//! end of the rendered list the new item belongs on.

use super::collection::EntryCollection;
use super::config::ThreadConfig;
use super::error::ThreadError;
use super::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Content that can be submitted to a board.
pub trait Payload {
    /// Blank payloads are dropped before they reach the collection.
    fn is_blank(&self) -> bool {
        false
    }
}

impl Payload for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Payload for &str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command<P> {
    AddEntry(P),
    AddSubEntry { entry_index: usize, payload: P },
    ReverseEntries,
    ReverseSubEntries { entry_index: usize },
    Clear,
}

/// End of a rendered list where a new item goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Front,
    Back,
}

impl Placement {
    fn for_orientation(reversed: bool) -> Self {
        if reversed {
            Placement::Front
        } else {
            Placement::Back
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    EntryAdded { placement: Placement },
    SubEntryAdded { entry_index: usize, placement: Placement },
    EntriesReversed,
    SubEntriesReversed { entry_index: usize },
    Cleared,
    /// Nothing to do: blank input or reversing an empty list
    Ignored,
    TargetNotFound { entry_index: usize },
}

pub struct Board<P> {
    entries: EntryCollection<P>,
}

impl<P: Payload> Board<P> {
    pub fn new(config: ThreadConfig) -> Self {
        Self {
            entries: EntryCollection::with_config(config),
        }
    }

    pub fn entries(&self) -> &EntryCollection<P> { &self.entries }

    /// Applies a single command to the owned collection
    pub fn apply(&mut self, command: Command<P>) -> Outcome {
        let outcome = match command {
            Command::AddEntry(payload) => self.add_entry(payload),
            Command::AddSubEntry { entry_index, payload } => self.add_sub_entry(entry_index, payload),
            Command::ReverseEntries => self.reverse_entries(),
            Command::ReverseSubEntries { entry_index } => self.reverse_sub_entries(entry_index),
            Command::Clear => {
                self.entries.reset();
                Outcome::Cleared
            }
        };
        debug!(?outcome, "applied command");
        outcome
    }

    fn add_entry(&mut self, payload: P) -> Outcome {
        if payload.is_blank() {
            return Outcome::Ignored;
        }
        let placement = Placement::for_orientation(self.entries.is_reversed());
        self.entries.add_entry(payload);
        Outcome::EntryAdded { placement }
    }

    fn add_sub_entry(&mut self, entry_index: usize, payload: P) -> Outcome {
        if payload.is_blank() {
            return Outcome::Ignored;
        }
        // Adding never changes orientation; a missing target fails below
        let reversed = self
            .entries
            .get_entry(entry_index)
            .is_some_and(|entry| entry.sub_entries().is_reversed());

        match self.entries.add_sub_entry(entry_index, payload) {
            Ok(_) => Outcome::SubEntryAdded {
                entry_index,
                placement: Placement::for_orientation(reversed),
            },
            Err(ThreadError::TargetNotFound(entry_index)) => Outcome::TargetNotFound { entry_index },
            Err(err) => {
                debug!(%err, "sub-entry not added");
                Outcome::TargetNotFound { entry_index }
            }
        }
    }

    fn reverse_entries(&mut self) -> Outcome {
        if self.entries.is_empty() {
            return Outcome::Ignored;
        }
        self.entries.reverse();
        Outcome::EntriesReversed
    }

    fn reverse_sub_entries(&mut self, entry_index: usize) -> Outcome {
        match self.entries.get_entry_mut(entry_index) {
            Some(entry) if entry.sub_entries().is_empty() => Outcome::Ignored,
            Some(mut entry) => {
                entry.reverse_sub_entries();
                Outcome::SubEntriesReversed { entry_index }
            }
            None => Outcome::TargetNotFound { entry_index },
        }
    }
}

impl<P: Clone> Board<P> {
    pub fn snapshot(&self) -> Snapshot<P> {
        self.entries.snapshot()
    }
}

impl<P: Payload> Default for Board<P> {
    fn default() -> Self {
        Self::new(ThreadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(payload: &str) -> Command<String> {
        Command::AddEntry(payload.to_string())
    }

    fn reply(entry_index: usize, payload: &str) -> Command<String> {
        Command::AddSubEntry {
            entry_index,
            payload: payload.to_string(),
        }
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut board: Board<String> = Board::default();
        assert_eq!(board.apply(add("   ")), Outcome::Ignored);
        assert_eq!(board.apply(add("")), Outcome::Ignored);
        assert!(board.entries().is_empty());

        board.apply(add("post"));
        assert_eq!(board.apply(reply(0, "\t")), Outcome::Ignored);
        assert!(board.entries().get_entry(0).unwrap().sub_entries().is_empty());
    }

    #[test]
    fn test_placement_tracks_orientation() {
        let mut board: Board<String> = Board::default();
        assert_eq!(board.apply(add("a")), Outcome::EntryAdded { placement: Placement::Front });
        assert_eq!(
            board.apply(reply(0, "a1")),
            Outcome::SubEntryAdded { entry_index: 0, placement: Placement::Back }
        );

        board.apply(Command::ReverseEntries);
        assert_eq!(board.apply(add("b")), Outcome::EntryAdded { placement: Placement::Back });

        board.apply(reply(0, "a2"));
        board.apply(Command::ReverseSubEntries { entry_index: 0 });
        assert_eq!(
            board.apply(reply(0, "a3")),
            Outcome::SubEntryAdded { entry_index: 0, placement: Placement::Front }
        );
    }

    #[test]
    fn test_reversing_empty_lists_is_ignored() {
        let mut board: Board<String> = Board::default();
        assert_eq!(board.apply(Command::ReverseEntries), Outcome::Ignored);
        assert!(board.entries().is_reversed());

        board.apply(add("a"));
        assert_eq!(board.apply(Command::ReverseSubEntries { entry_index: 0 }), Outcome::Ignored);
        assert!(!board.entries().get_entry(0).unwrap().sub_entries().is_reversed());
    }

    #[test]
    fn test_stale_index_reports_target_not_found() {
        let mut board: Board<String> = Board::default();
        board.apply(add("a"));
        assert_eq!(board.apply(reply(3, "late")), Outcome::TargetNotFound { entry_index: 3 });
        assert_eq!(
            board.apply(Command::ReverseSubEntries { entry_index: 3 }),
            Outcome::TargetNotFound { entry_index: 3 }
        );
    }

    #[test]
    fn test_sub_entry_added_through_collection() {
        let mut board: Board<String> = Board::default();
        board.apply(add("a"));
        board.apply(add("b"));

        assert_eq!(
            board.apply(reply(1, "a1")),
            Outcome::SubEntryAdded { entry_index: 1, placement: Placement::Back }
        );
        assert_eq!(board.apply(reply(2, "gone")), Outcome::TargetNotFound { entry_index: 2 });

        let snapshot = board.snapshot();
        assert_eq!(snapshot.entries[1].payload, "a");
        assert_eq!(snapshot.entries[1].sub_entries.payloads, vec!["a1"]);
        assert!(snapshot.entries[0].sub_entries.payloads.is_empty());
    }

    #[test]
    fn test_clear_resets_thread() {
        let mut board: Board<&str> = Board::default();
        board.apply(Command::AddEntry("a"));
        board.apply(Command::ReverseEntries);
        assert_eq!(board.apply(Command::Clear), Outcome::Cleared);

        let snapshot = board.snapshot();
        assert_eq!(snapshot.length, 0);
        assert!(snapshot.reversed);
    }
}
