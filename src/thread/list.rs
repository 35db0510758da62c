//! Singly-linked list whose insertion end can be flipped in place.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Arena slot of the next node, `None` at the end of the chain.
type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Link,
}

/// Singly-linked list with O(1) insertion at both ends and in-place reversal.
///
/// Nodes are stored in an arena owned by the list and link to each other by
/// slot index. Slots are never freed individually, so the arena length is the
/// list length. `tail` only marks the last slot so tail appends stay O(1).
///
/// The `reversed` flag decides which end [`push`](Self::push) inserts at:
/// head when reversed, tail otherwise. It only changes through
/// [`reverse`](Self::reverse), which relinks every node at the same time.
#[derive(Clone)]
pub struct ReversibleList<T> {
    nodes: Vec<Node<T>>,
    head: Link,
    tail: Link,
    reversed: bool,
}

impl<T> ReversibleList<T> {
    /// Creates an empty list with the given orientation
    pub fn new(reversed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            reversed,
        }
    }

    // Getters
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn is_reversed(&self) -> bool { self.reversed }

    /// Appends a value after the current tail.
    pub fn push_tail(&mut self, value: T) -> &mut T {
        let slot = self.nodes.len();
        self.nodes.push(Node { value, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);

        &mut self.nodes[slot].value
    }

    /// Inserts a value before the current head.
    pub fn push_head(&mut self, value: T) -> &mut T {
        if self.head.is_none() {
            return self.push_tail(value);
        }

        let slot = self.nodes.len();
        self.nodes.push(Node { value, next: self.head });
        self.head = Some(slot);

        &mut self.nodes[slot].value
    }

    /// Inserts at the end selected by the current orientation.
    pub fn push(&mut self, value: T) -> &mut T {
        if self.reversed {
            self.push_head(value)
        } else {
            self.push_tail(value)
        }
    }

    /// Returns the value at `index`, counting from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index).map(|slot| &self.nodes[slot].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        Some(&mut self.nodes[slot].value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.nodes[slot].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.nodes[slot].value)
    }

    /// Reverses the direction of every link and flips the orientation.
    ///
    /// Runs in O(len) time without allocating.
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            cursor = mem::replace(&mut self.nodes[slot].next, prev);
            prev = Some(slot);
        }

        mem::swap(&mut self.head, &mut self.tail);
        self.reversed = !self.reversed;
    }

    /// Iterates values from head to tail along the links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    fn slot_at(&self, index: usize) -> Link {
        if index >= self.len() {
            return None;
        }

        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|slot| self.nodes[slot].next);
        }
        cursor
    }
}

impl<T> Default for ReversibleList<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T: fmt::Debug> fmt::Debug for ReversibleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReversibleList")
            .field("reversed", &self.reversed)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Two lists are equal when they share an orientation and hold equal values
/// in the same link order, regardless of arena layout.
impl<T: PartialEq> PartialEq for ReversibleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.reversed == other.reversed
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ReversibleList<T> {}

impl<'a, T> IntoIterator for &'a ReversibleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ReversibleList`] in link order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
