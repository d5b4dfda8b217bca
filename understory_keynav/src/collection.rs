// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, keyed collections that navigation delegates traverse.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

/// An ordered, finite sequence of keyed items.
///
/// The host owns the collection; delegates only read it. Implementations must
/// provide stable key identity and a consistent successor/predecessor order:
/// repeatedly calling [`key_after`](Collection::key_after) from any key reaches
/// `None` within [`len`](Collection::len) steps, and likewise for
/// [`key_before`](Collection::key_before).
///
/// Array-backed, tree-backed and virtualized containers are all valid
/// implementations as long as they honor that contract.
pub trait Collection {
    /// Identifier for a single item.
    type Key: Copy + Eq + Hash;

    /// Number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key of the first item, or `None` when empty.
    fn first_key(&self) -> Option<Self::Key>;

    /// Key of the last item, or `None` when empty.
    fn last_key(&self) -> Option<Self::Key>;

    /// Key immediately after `key`, or `None` at the end.
    fn key_after(&self, key: Self::Key) -> Option<Self::Key>;

    /// Key immediately before `key`, or `None` at the start.
    fn key_before(&self, key: Self::Key) -> Option<Self::Key>;

    /// Iterate keys in order, from [`first_key`](Collection::first_key).
    ///
    /// The iterator yields at most [`len`](Collection::len) keys, so a
    /// collection whose successor function cycles still terminates.
    fn keys(&self) -> Keys<'_, Self> {
        Keys {
            collection: self,
            next: self.first_key(),
            remaining: self.len(),
        }
    }

    /// Returns `true` if `key` is a member of this collection.
    ///
    /// The default walks [`keys`](Collection::keys); implementations with an
    /// index should override it.
    fn contains(&self, key: Self::Key) -> bool {
        self.keys().any(|k| k == key)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Key = C::Key;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn first_key(&self) -> Option<Self::Key> {
        (**self).first_key()
    }

    fn last_key(&self) -> Option<Self::Key> {
        (**self).last_key()
    }

    fn key_after(&self, key: Self::Key) -> Option<Self::Key> {
        (**self).key_after(key)
    }

    fn key_before(&self, key: Self::Key) -> Option<Self::Key> {
        (**self).key_before(key)
    }

    fn contains(&self, key: Self::Key) -> bool {
        (**self).contains(key)
    }
}

/// Forward iterator over the keys of a [`Collection`].
///
/// Created by [`Collection::keys`].
pub struct Keys<'a, C: Collection + ?Sized> {
    collection: &'a C,
    next: Option<C::Key>,
    remaining: usize,
}

impl<C: Collection + ?Sized> Iterator for Keys<'_, C> {
    type Item = C::Key;

    fn next(&mut self) -> Option<C::Key> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.next?;
        self.remaining -= 1;
        self.next = if self.remaining == 0 {
            None
        } else {
            self.collection.key_after(key)
        };
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_none() || self.remaining == 0 {
            (0, Some(0))
        } else {
            (1, Some(self.remaining))
        }
    }
}

impl<C: Collection + ?Sized> fmt::Debug for Keys<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// An array-backed [`Collection`].
///
/// Keys are stored in insertion order alongside a position index, so
/// successor, predecessor and membership queries are O(1). Inserting a key
/// that is already present is a no-op; the key keeps its first position.
#[derive(Clone, Debug)]
pub struct ListCollection<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
}

impl<K> Default for ListCollection<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ListCollection<K> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from keys in order.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        keys.into_iter().collect()
    }

    /// Append `key` to the end.
    ///
    /// Returns `false` if the key was already present.
    pub fn push(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.keys.len());
        self.keys.push(key);
        true
    }

    /// Position of `key` in the collection.
    pub fn position(&self, key: K) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Keys in order.
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }
}

impl<K: Copy + Eq + Hash> FromIterator<K> for ListCollection<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<K: Copy + Eq + Hash> Extend<K> for ListCollection<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: Copy + Eq + Hash> Collection for ListCollection<K> {
    type Key = K;

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn first_key(&self) -> Option<K> {
        self.keys.first().copied()
    }

    fn last_key(&self) -> Option<K> {
        self.keys.last().copied()
    }

    fn key_after(&self, key: K) -> Option<K> {
        let pos = self.position(key)?;
        self.keys.get(pos + 1).copied()
    }

    fn key_before(&self, key: K) -> Option<K> {
        let pos = self.position(key)?;
        self.keys.get(pos.checked_sub(1)?).copied()
    }

    fn contains(&self, key: K) -> bool {
        self.index.contains_key(&key)
    }
}
