// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation intents and the delegate trait hosts program against.

use crate::collection::Collection;
use crate::delegate::LinearDelegate;

/// A keyboard navigation intent.
///
/// Hosts translate key presses into these values; how each intent maps to a
/// key is up to the [`KeyboardDelegate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move forward in collection order, independent of layout.
    Next,
    /// Move backward in collection order, independent of layout.
    Prev,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Jump to the first focusable key (for example, Home).
    First,
    /// Jump to the last focusable key (for example, End).
    Last,
}

/// Answers directional focus queries for a collection.
///
/// Every query returns `None` when there is nothing to focus. The origin is
/// the currently focused key, or `None` when nothing is focused yet.
pub trait KeyboardDelegate {
    /// Identifier of a focusable item.
    type Key: Copy + Eq;

    /// Next key in collection order.
    fn next_key(&self, key: Option<Self::Key>) -> Option<Self::Key>;

    /// Previous key in collection order.
    fn previous_key(&self, key: Option<Self::Key>) -> Option<Self::Key>;

    /// Key visually to the left.
    fn key_left_of(&self, key: Option<Self::Key>) -> Option<Self::Key>;

    /// Key visually to the right.
    fn key_right_of(&self, key: Option<Self::Key>) -> Option<Self::Key>;

    /// Key visually above.
    fn key_above(&self, key: Option<Self::Key>) -> Option<Self::Key>;

    /// Key visually below.
    fn key_below(&self, key: Option<Self::Key>) -> Option<Self::Key>;

    /// First focusable key.
    fn first_key(&self) -> Option<Self::Key>;

    /// Last focusable key.
    fn last_key(&self) -> Option<Self::Key>;

    /// Resolve `intent` relative to `origin`.
    fn navigate(&self, intent: Navigation, origin: Option<Self::Key>) -> Option<Self::Key> {
        match intent {
            Navigation::Next => self.next_key(origin),
            Navigation::Prev => self.previous_key(origin),
            Navigation::Up => self.key_above(origin),
            Navigation::Down => self.key_below(origin),
            Navigation::Left => self.key_left_of(origin),
            Navigation::Right => self.key_right_of(origin),
            Navigation::First => self.first_key(),
            Navigation::Last => self.last_key(),
        }
    }
}

impl<C: Collection> KeyboardDelegate for LinearDelegate<C> {
    type Key = C::Key;

    fn next_key(&self, key: Option<C::Key>) -> Option<C::Key> {
        Self::next_key(self, key)
    }

    fn previous_key(&self, key: Option<C::Key>) -> Option<C::Key> {
        Self::previous_key(self, key)
    }

    fn key_left_of(&self, key: Option<C::Key>) -> Option<C::Key> {
        Self::key_left_of(self, key)
    }

    fn key_right_of(&self, key: Option<C::Key>) -> Option<C::Key> {
        Self::key_right_of(self, key)
    }

    fn key_above(&self, key: Option<C::Key>) -> Option<C::Key> {
        Self::key_above(self, key)
    }

    fn key_below(&self, key: Option<C::Key>) -> Option<C::Key> {
        Self::key_below(self, key)
    }

    fn first_key(&self) -> Option<C::Key> {
        Self::first_key(self)
    }

    fn last_key(&self) -> Option<C::Key> {
        Self::last_key(self)
    }
}
