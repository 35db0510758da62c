//! Read-only structural dump of a thread for diagnostic display.
//!
//! A snapshot lists everything in physical link order (head to tail). It does
//! no reordering of its own, so whatever orientation earlier reversals left
//! behind is what the snapshot shows.

use super::collection::EntryCollection;
use super::entry::{Entry, SubEntryCollection};
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<P> {
    pub reversed: bool,
    pub length: usize,
    pub entries: Vec<EntrySnapshot<P>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySnapshot<P> {
    pub payload: P,
    pub sub_entries: SubEntrySnapshot<P>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntrySnapshot<P> {
    pub reversed: bool,
    pub length: usize,
    pub payloads: Vec<P>,
}

impl<P: Serialize> Snapshot<P> {
    /// Renders the snapshot as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<P: Clone> EntryCollection<P> {
    pub fn snapshot(&self) -> Snapshot<P> {
        Snapshot {
            reversed: self.is_reversed(),
            length: self.len(),
            entries: self.iter().map(EntrySnapshot::from).collect(),
        }
    }
}

impl<P: Clone> From<&Entry<P>> for EntrySnapshot<P> {
    fn from(entry: &Entry<P>) -> Self {
        Self {
            payload: entry.payload().clone(),
            sub_entries: SubEntrySnapshot::from(entry.sub_entries()),
        }
    }
}

impl<P: Clone> From<&SubEntryCollection<P>> for SubEntrySnapshot<P> {
    fn from(sub_entries: &SubEntryCollection<P>) -> Self {
        Self {
            reversed: sub_entries.is_reversed(),
            length: sub_entries.len(),
            payloads: sub_entries.iter().map(|sub| sub.payload().clone()).collect(),
        }
    }
}
