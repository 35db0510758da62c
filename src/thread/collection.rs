use super::config::ThreadConfig;
use super::entry::{Entry, EntryMut, SubEntry};
use super::error::{Result, ThreadError};
use super::list::{Iter, ReversibleList};
use tracing::{debug, trace};

/// Top-level entries of a thread, each owning its sub-entries.
///
/// Orientation of the outer list and of every entry's sub-entry list are
/// independent. Reversing one never touches another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCollection<P> {
    list: ReversibleList<Entry<P>>,
    config: ThreadConfig,
}

impl<P> EntryCollection<P> {
    /// Creates an empty collection with newest entries first
    pub fn new() -> Self {
        Self::with_config(ThreadConfig::default())
    }

    pub fn with_config(config: ThreadConfig) -> Self {
        Self {
            list: ReversibleList::new(config.entries_reversed),
            config,
        }
    }

    // Getters
    pub fn config(&self) -> &ThreadConfig { &self.config }
    pub fn len(&self) -> usize { self.list.len() }
    pub fn is_empty(&self) -> bool { self.list.is_empty() }
    pub fn is_reversed(&self) -> bool { self.list.is_reversed() }
    pub fn iter(&self) -> Iter<'_, Entry<P>> { self.list.iter() }

    /// Adds a new entry with an empty sub-entry collection
    pub fn add_entry(&mut self, payload: P) -> EntryMut<'_, P> {
        let entry = Entry::new(payload, self.config.sub_entries_reversed);
        let reversed = self.list.is_reversed();
        debug!(len = self.list.len() + 1, reversed, "added entry");
        EntryMut::new(self.list.push(entry))
    }

    /// Returns the entry at `index`, or `None` when out of range
    pub fn get_entry(&self, index: usize) -> Option<&Entry<P>> {
        self.list.get(index)
    }

    pub fn get_entry_mut(&mut self, index: usize) -> Option<EntryMut<'_, P>> {
        self.list.get_mut(index).map(EntryMut::new)
    }

    pub fn try_get_entry(&self, index: usize) -> Result<&Entry<P>> {
        let len = self.list.len();
        self.list
            .get(index)
            .ok_or(ThreadError::IndexOutOfRange { index, len })
    }

    pub fn try_get_entry_mut(&mut self, index: usize) -> Result<EntryMut<'_, P>> {
        self.entry_mut(index).map(EntryMut::new)
    }

    /// Adds a sub-entry under the entry at `entry_index`.
    ///
    /// An unresolved index is an expected outcome for stale positions and is
    /// reported as [`ThreadError::TargetNotFound`].
    pub fn add_sub_entry(&mut self, entry_index: usize, payload: P) -> Result<&SubEntry<P>> {
        let entry = self.resolve_target(entry_index)?;
        Ok(entry.add_sub_entry(payload))
    }

    /// Reverses the sub-entries of the entry at `entry_index` only
    pub fn reverse_sub_entries(&mut self, entry_index: usize) -> Result<()> {
        self.resolve_target(entry_index)?.reverse_sub_entries();
        Ok(())
    }

    /// Reverses the order of the top-level entries.
    ///
    /// Sub-entry collections keep their own order and orientation.
    pub fn reverse(&mut self) {
        self.list.reverse();
        debug!(len = self.list.len(), reversed = self.list.is_reversed(), "reversed entries");
    }

    /// Drops every entry and sub-entry and restores the configured orientation
    pub fn reset(&mut self) {
        debug!(discarded = self.list.len(), "reset entries");
        self.list = ReversibleList::new(self.config.entries_reversed);
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry<P>> {
        let len = self.list.len();
        self.list
            .get_mut(index)
            .ok_or(ThreadError::IndexOutOfRange { index, len })
    }

    fn resolve_target(&mut self, entry_index: usize) -> Result<&mut Entry<P>> {
        self.entry_mut(entry_index).map_err(|err| {
            trace!(%err, "sub-entry target did not resolve");
            ThreadError::TargetNotFound(entry_index)
        })
    }
}

impl<P> Default for EntryCollection<P> {
    fn default() -> Self {
        Self::new()
    }
}
