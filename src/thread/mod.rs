//! Comment threads: top-level entries, each with its own list of sub-entries.

pub mod board;
pub mod collection;
pub mod config;
pub mod entry;
pub mod error;
pub mod list;
pub mod snapshot;

pub use board::{Board, Command, Outcome, Payload, Placement};
pub use collection::EntryCollection;
pub use config::ThreadConfig;
pub use entry::{Entry, EntryMut, SubEntry, SubEntryCollection};
pub use error::{Result, ThreadError};
pub use list::ReversibleList;
pub use snapshot::{EntrySnapshot, Snapshot, SubEntrySnapshot};
