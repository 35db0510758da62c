use super::list::{Iter, ReversibleList};
use tracing::debug;

/// A reply attached to one top-level entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEntry<P> {
    payload: P,
}

impl<P> SubEntry<P> {
    pub fn payload(&self) -> &P { &self.payload }
}

/// Ordered sub-entries of a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEntryCollection<P> {
    list: ReversibleList<SubEntry<P>>,
}

impl<P> SubEntryCollection<P> {
    pub fn new(reversed: bool) -> Self {
        Self {
            list: ReversibleList::new(reversed),
        }
    }

    /// Adds a sub-entry at the head when reversed, at the tail otherwise
    pub fn add_sub_entry(&mut self, payload: P) -> &SubEntry<P> {
        let reversed = self.list.is_reversed();
        let sub_entry = self.list.push(SubEntry { payload });
        debug!(reversed, "added sub-entry");
        sub_entry
    }

    pub fn get(&self, index: usize) -> Option<&SubEntry<P>> {
        self.list.get(index)
    }

    pub fn reverse(&mut self) {
        self.list.reverse();
        debug!(len = self.list.len(), reversed = self.list.is_reversed(), "reversed sub-entries");
    }

    // Getters
    pub fn len(&self) -> usize { self.list.len() }
    pub fn is_empty(&self) -> bool { self.list.is_empty() }
    pub fn is_reversed(&self) -> bool { self.list.is_reversed() }
    pub fn iter(&self) -> Iter<'_, SubEntry<P>> { self.list.iter() }
}

/// A top-level entry owning its own sub-entry collection.
///
/// The sub-entry collection is created with the entry and is never replaced;
/// it can only grow or be reversed. Collections hand out [`EntryMut`] rather
/// than `&mut Entry` so the entry itself cannot be overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<P> {
    payload: P,
    sub_entries: SubEntryCollection<P>,
}

impl<P> Entry<P> {
    pub(crate) fn new(payload: P, sub_entries_reversed: bool) -> Self {
        Self {
            payload,
            sub_entries: SubEntryCollection::new(sub_entries_reversed),
        }
    }

    // Getters
    pub fn payload(&self) -> &P { &self.payload }
    pub fn sub_entries(&self) -> &SubEntryCollection<P> { &self.sub_entries }

    pub(crate) fn add_sub_entry(&mut self, payload: P) -> &SubEntry<P> {
        self.sub_entries.add_sub_entry(payload)
    }

    pub fn sub_entry(&self, index: usize) -> Option<&SubEntry<P>> {
        self.sub_entries.get(index)
    }

    pub(crate) fn reverse_sub_entries(&mut self) {
        self.sub_entries.reverse();
    }
}

/// Mutable handle to an entry stored in a collection.
///
/// The handle only allows adding and reversing sub-entries. Assigning a whole
/// entry through it does not compile:
///
/// ```compile_fail
/// use comment_thread::thread::EntryCollection;
///
/// let mut entries = EntryCollection::new();
/// entries.add_entry("a".to_string());
/// entries.add_entry("b".to_string());
///
/// let replacement = entries.get_entry(0).unwrap().clone();
/// *entries.get_entry_mut(1).unwrap() = replacement;
/// ```
#[derive(Debug)]
pub struct EntryMut<'a, P> {
    entry: &'a mut Entry<P>,
}

impl<'a, P> EntryMut<'a, P> {
    pub(crate) fn new(entry: &'a mut Entry<P>) -> Self {
        Self { entry }
    }

    // Getters
    pub fn payload(&self) -> &P { self.entry.payload() }
    pub fn sub_entries(&self) -> &SubEntryCollection<P> { self.entry.sub_entries() }
    pub fn as_entry(&self) -> &Entry<P> { self.entry }

    pub fn sub_entry(&self, index: usize) -> Option<&SubEntry<P>> {
        self.entry.sub_entry(index)
    }

    pub fn add_sub_entry(&mut self, payload: P) -> &SubEntry<P> {
        self.entry.add_sub_entry(payload)
    }

    pub fn reverse_sub_entries(&mut self) {
        self.entry.reverse_sub_entries();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payloads(collection: &SubEntryCollection<&'static str>) -> Vec<&'static str> {
        collection.iter().map(|sub| *sub.payload()).collect()
    }

    #[test]
    fn test_forward_sub_entries_append() {
        let mut replies = SubEntryCollection::new(false);
        replies.add_sub_entry("first");
        replies.add_sub_entry("second");

        assert_eq!(replies.len(), 2);
        assert_eq!(replies.get(1).map(SubEntry::payload), Some(&"second"));
        assert_eq!(payloads(&replies), vec!["first", "second"]);
    }

    #[test]
    fn test_reversed_sub_entries_prepend() {
        let mut replies = SubEntryCollection::new(true);
        replies.add_sub_entry("first");
        replies.add_sub_entry("second");

        assert_eq!(replies.get(0).map(SubEntry::payload), Some(&"second"));
        assert_eq!(payloads(&replies), vec!["second", "first"]);
    }

    #[test]
    fn test_entry_starts_with_empty_sub_entries() {
        let entry = Entry::new("hello", false);
        assert_eq!(entry.payload(), &"hello");
        assert!(entry.sub_entries().is_empty());
        assert!(!entry.sub_entries().is_reversed());
        assert!(entry.sub_entry(0).is_none());
    }

    #[test]
    fn test_entry_reverse_sub_entries() {
        let mut entry = Entry::new("post", false);
        entry.add_sub_entry("a");
        entry.add_sub_entry("b");
        entry.reverse_sub_entries();

        assert!(entry.sub_entries().is_reversed());
        assert_eq!(payloads(entry.sub_entries()), vec!["b", "a"]);

        // Reversed collections insert at the head
        entry.add_sub_entry("c");
        assert_eq!(payloads(entry.sub_entries()), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_entry_handle_mutates_in_place() {
        let mut entry = Entry::new("post", false);
        {
            let mut handle = EntryMut::new(&mut entry);
            handle.add_sub_entry("a");
            handle.add_sub_entry("b");
            handle.reverse_sub_entries();
            assert_eq!(handle.payload(), &"post");
            assert_eq!(handle.sub_entry(0).map(SubEntry::payload), Some(&"b"));
        }

        assert!(entry.sub_entries().is_reversed());
        assert_eq!(payloads(entry.sub_entries()), vec!["b", "a"]);
    }
}
