//! In-memory comment threads built on a singly-linked list that can be
//! reversed in place.

pub mod thread;

pub use thread::{
    Board, Command, Entry, EntryCollection, EntryMut, EntrySnapshot, Outcome, Payload, Placement,
    Result, ReversibleList, Snapshot, SubEntry, SubEntryCollection, SubEntrySnapshot,
    ThreadConfig, ThreadError,
};
