// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear keyboard navigation over a [`Collection`].

use core::fmt;

use hashbrown::HashSet;
use log::{trace, warn};

use crate::collection::Collection;

/// Reading direction of the host layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Returns `true` for [`Direction::Rtl`].
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Layout axis of the navigable items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items are laid out in a row.
    #[default]
    Horizontal,
    /// Items are laid out in a column.
    Vertical,
}

/// Layout configuration for a [`LinearDelegate`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DelegateOptions {
    /// Reading direction; only affects left/right queries.
    pub direction: Direction,
    /// Layout axis.
    pub orientation: Orientation,
}

impl DelegateOptions {
    /// Returns `true` when left and right should be swapped.
    ///
    /// That is the case for right-to-left, horizontal layouts only.
    pub const fn flips_direction(&self) -> bool {
        self.direction.is_rtl() && matches!(self.orientation, Orientation::Horizontal)
    }
}

/// Failure of a bounded traversal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// No enabled key was reached within the step budget.
    ///
    /// This only happens when the collection's successor or predecessor
    /// function cycles without returning `None`.
    #[error("no enabled key reached within {steps} steps; collection order is cyclic")]
    Unbounded {
        /// Number of steps taken before giving up.
        steps: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Stateless keyboard navigation over an ordered collection.
///
/// The delegate answers "which key gets focus next" for arrow keys and
/// Home/End. Traversal wraps around at both ends and skips disabled keys.
/// For right-to-left horizontal layouts, left and right are swapped; up and
/// down always follow collection order.
///
/// Layout options and the disabled set are captured at construction. If the
/// collection, the disabled set, or the layout changes, build a new delegate.
///
/// Queries take the currently focused key, or `None` when nothing is focused.
/// Moving forward from `None` yields the first enabled key; moving backward
/// yields the last. A key that is not a member of the collection yields `None`.
pub struct LinearDelegate<C: Collection> {
    collection: C,
    options: DelegateOptions,
    disabled: HashSet<C::Key>,
    flip_direction: bool,
    all_disabled: bool,
}

impl<C: Collection> LinearDelegate<C> {
    /// Create a delegate with no disabled keys.
    pub fn new(collection: C, options: DelegateOptions) -> Self {
        let mut delegate = Self {
            collection,
            options,
            disabled: HashSet::new(),
            flip_direction: options.flips_direction(),
            all_disabled: false,
        };
        delegate.refresh();
        delegate
    }

    /// Replace the disabled set.
    ///
    /// Scans the whole collection once to determine whether any key remains
    /// enabled.
    #[must_use]
    pub fn with_disabled_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = C::Key>,
    {
        self.disabled = keys.into_iter().collect();
        self.refresh();
        self
    }

    fn refresh(&mut self) {
        let all_disabled = self.collection.keys().all(|k| self.disabled.contains(&k));
        self.all_disabled = all_disabled;
        trace!(
            "linear delegate: {} keys, {} disabled, flip_direction={}, all_disabled={}",
            self.collection.len(),
            self.disabled.len(),
            self.flip_direction,
            all_disabled,
        );
    }

    /// The collection being navigated.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Layout options captured at construction.
    pub fn options(&self) -> DelegateOptions {
        self.options
    }

    /// Whether left/right are swapped.
    pub fn flips_direction(&self) -> bool {
        self.flip_direction
    }

    /// Whether every key was disabled at construction (or the collection was empty).
    pub fn all_disabled(&self) -> bool {
        self.all_disabled
    }

    /// Whether `key` is in the disabled set.
    pub fn is_disabled(&self, key: C::Key) -> bool {
        self.disabled.contains(&key)
    }

    /// Key to the visual left of `key`.
    pub fn key_left_of(&self, key: Option<C::Key>) -> Option<C::Key> {
        if self.flip_direction {
            self.next_key(key)
        } else {
            self.previous_key(key)
        }
    }

    /// Key to the visual right of `key`.
    pub fn key_right_of(&self, key: Option<C::Key>) -> Option<C::Key> {
        if self.flip_direction {
            self.previous_key(key)
        } else {
            self.next_key(key)
        }
    }

    /// Key above `key`; always the previous key.
    pub fn key_above(&self, key: Option<C::Key>) -> Option<C::Key> {
        self.previous_key(key)
    }

    /// Key below `key`; always the next key.
    pub fn key_below(&self, key: Option<C::Key>) -> Option<C::Key> {
        self.next_key(key)
    }

    /// First enabled key, searching forward from the collection's first key.
    pub fn first_key(&self) -> Option<C::Key> {
        let key = self.collection.first_key()?;
        if self.disabled.contains(&key) {
            self.next_key(Some(key))
        } else {
            Some(key)
        }
    }

    /// Last enabled key, searching backward from the collection's last key.
    pub fn last_key(&self) -> Option<C::Key> {
        let key = self.collection.last_key()?;
        if self.disabled.contains(&key) {
            self.previous_key(Some(key))
        } else {
            Some(key)
        }
    }

    /// Next enabled key after `key`, wrapping to the start.
    ///
    /// Returns `None` if every key is disabled or `key` is not in the
    /// collection. A cyclic collection is logged and also yields `None`; use
    /// [`try_next_key`](Self::try_next_key) to observe that case.
    pub fn next_key(&self, key: Option<C::Key>) -> Option<C::Key> {
        self.try_next_key(key).unwrap_or_else(|err| {
            warn!("next_key: {err}");
            None
        })
    }

    /// Previous enabled key before `key`, wrapping to the end.
    ///
    /// See [`next_key`](Self::next_key).
    pub fn previous_key(&self, key: Option<C::Key>) -> Option<C::Key> {
        self.try_previous_key(key).unwrap_or_else(|err| {
            warn!("previous_key: {err}");
            None
        })
    }

    /// Like [`next_key`](Self::next_key), but reports a cyclic collection.
    pub fn try_next_key(&self, key: Option<C::Key>) -> Result<Option<C::Key>, TraversalError> {
        self.step(key, Step::Forward)
    }

    /// Like [`previous_key`](Self::previous_key), but reports a cyclic collection.
    pub fn try_previous_key(
        &self,
        key: Option<C::Key>,
    ) -> Result<Option<C::Key>, TraversalError> {
        self.step(key, Step::Backward)
    }

    fn step(&self, origin: Option<C::Key>, step: Step) -> Result<Option<C::Key>, TraversalError> {
        if self.all_disabled {
            return Ok(None);
        }
        if let Some(key) = origin
            && !self.collection.contains(key)
        {
            return Ok(None);
        }

        // With at least one enabled key, a well-formed collection reaches it
        // within `len` steps from any origin, itself included.
        let limit = self.collection.len() + 1;
        let mut current = origin;
        for _ in 0..limit {
            let advanced = current.and_then(|key| match step {
                Step::Forward => self.collection.key_after(key),
                Step::Backward => self.collection.key_before(key),
            });
            let wrapped = advanced.or_else(|| match step {
                Step::Forward => self.collection.first_key(),
                Step::Backward => self.collection.last_key(),
            });
            let Some(candidate) = wrapped else {
                return Ok(None);
            };
            if !self.disabled.contains(&candidate) {
                return Ok(Some(candidate));
            }
            current = Some(candidate);
        }
        Err(TraversalError::Unbounded { steps: limit })
    }
}

impl<C> Clone for LinearDelegate<C>
where
    C: Collection + Clone,
{
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            options: self.options,
            disabled: self.disabled.clone(),
            flip_direction: self.flip_direction,
            all_disabled: self.all_disabled,
        }
    }
}

impl<C> fmt::Debug for LinearDelegate<C>
where
    C: Collection + fmt::Debug,
    C::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearDelegate")
            .field("collection", &self.collection)
            .field("options", &self.options)
            .field("disabled", &self.disabled)
            .field("flip_direction", &self.flip_direction)
            .field("all_disabled", &self.all_disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::ListCollection;

    const HORIZONTAL_LTR: DelegateOptions = DelegateOptions {
        direction: Direction::Ltr,
        orientation: Orientation::Horizontal,
    };
    const HORIZONTAL_RTL: DelegateOptions = DelegateOptions {
        direction: Direction::Rtl,
        orientation: Orientation::Horizontal,
    };
    const VERTICAL_RTL: DelegateOptions = DelegateOptions {
        direction: Direction::Rtl,
        orientation: Orientation::Vertical,
    };

    fn abcd() -> ListCollection<char> {
        ListCollection::from_keys(['A', 'B', 'C', 'D'])
    }

    #[test]
    fn skips_disabled_and_wraps() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys(['A', 'C']);

        assert_eq!(delegate.first_key(), Some('B'));
        assert_eq!(delegate.last_key(), Some('D'));
        assert_eq!(delegate.next_key(Some('B')), Some('D'));
        assert_eq!(delegate.next_key(Some('D')), Some('B'));
        assert_eq!(delegate.previous_key(Some('B')), Some('D'));
        assert_eq!(delegate.key_left_of(Some('B')), Some('D'));
        assert_eq!(delegate.key_right_of(Some('B')), Some('D'));
    }

    #[test]
    fn rtl_horizontal_swaps_left_and_right() {
        let list = abcd();
        let ltr = LinearDelegate::new(&list, HORIZONTAL_LTR);
        let rtl = LinearDelegate::new(&list, HORIZONTAL_RTL);

        assert!(!ltr.flips_direction());
        assert!(rtl.flips_direction());
        assert_eq!(ltr.key_left_of(Some('B')), Some('A'));
        assert_eq!(ltr.key_right_of(Some('B')), Some('C'));
        assert_eq!(rtl.key_left_of(Some('B')), Some('C'));
        assert_eq!(rtl.key_right_of(Some('B')), Some('A'));
    }

    #[test]
    fn rtl_with_disabled_keys() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_RTL).with_disabled_keys(['A', 'C']);

        assert_eq!(delegate.key_left_of(Some('B')), Some('D'));
        assert_eq!(delegate.key_right_of(Some('B')), Some('D'));
        assert_eq!(delegate.key_right_of(Some('D')), Some('B'));
    }

    #[test]
    fn vertical_never_flips() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, VERTICAL_RTL);

        assert!(!delegate.flips_direction());
        assert_eq!(delegate.key_left_of(Some('B')), Some('A'));
        assert_eq!(delegate.key_right_of(Some('B')), Some('C'));
    }

    #[test]
    fn up_and_down_ignore_layout() {
        let list = abcd();
        let options = [
            HORIZONTAL_LTR,
            HORIZONTAL_RTL,
            VERTICAL_RTL,
            DelegateOptions {
                direction: Direction::Ltr,
                orientation: Orientation::Vertical,
            },
        ];
        for options in options {
            let delegate = LinearDelegate::new(&list, options);
            assert_eq!(delegate.key_above(Some('B')), Some('A'), "{options:?}");
            assert_eq!(delegate.key_below(Some('B')), Some('C'), "{options:?}");
            assert_eq!(delegate.key_above(Some('A')), Some('D'), "{options:?}");
            assert_eq!(delegate.key_below(Some('D')), Some('A'), "{options:?}");
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let list = ListCollection::from_keys(0_u32..7);
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys([0, 3, 4]);
        let enabled = 4;

        for start in [1_u32, 2, 5, 6] {
            let mut key = Some(start);
            let mut visited = 0;
            for _ in 0..enabled {
                key = delegate.next_key(key);
                visited += 1;
                let k = key.expect("an enabled key exists");
                assert!(!delegate.is_disabled(k), "landed on disabled key {k}");
            }
            assert_eq!(key, Some(start), "forward cycle from {start}");
            assert_eq!(visited, enabled, "visit count from {start}");

            for _ in 0..enabled {
                key = delegate.previous_key(key);
            }
            assert_eq!(key, Some(start), "backward cycle from {start}");
        }
    }

    #[test]
    fn all_disabled_yields_no_key() {
        let list = ListCollection::from_keys(['A', 'B', 'C']);
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys(['A', 'B', 'C']);

        assert!(delegate.all_disabled());
        assert_eq!(delegate.next_key(Some('A')), None);
        assert_eq!(delegate.previous_key(Some('C')), None);
        assert_eq!(delegate.key_left_of(Some('B')), None);
        assert_eq!(delegate.key_below(None), None);
        // The edges are disabled, so the skip finds nothing to focus.
        assert_eq!(delegate.first_key(), None);
        assert_eq!(delegate.last_key(), None);
    }

    #[test]
    fn single_enabled_item_wraps_to_itself() {
        let list = ListCollection::from_keys([7_u32]);
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR);

        assert_eq!(delegate.next_key(Some(7)), Some(7));
        assert_eq!(delegate.previous_key(Some(7)), Some(7));
        assert_eq!(delegate.first_key(), Some(7));
        assert_eq!(delegate.last_key(), Some(7));
    }

    #[test]
    fn empty_collection() {
        let list: ListCollection<u32> = ListCollection::new();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR);

        assert!(delegate.all_disabled());
        assert_eq!(delegate.first_key(), None);
        assert_eq!(delegate.last_key(), None);
        assert_eq!(delegate.next_key(None), None);
        assert_eq!(delegate.previous_key(None), None);
    }

    #[test]
    fn nothing_focused_starts_at_the_edges() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys(['A', 'D']);

        assert_eq!(delegate.next_key(None), Some('B'));
        assert_eq!(delegate.previous_key(None), Some('C'));
    }

    #[test]
    fn unknown_origin_yields_no_key() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR);

        assert_eq!(delegate.next_key(Some('Z')), None);
        assert_eq!(delegate.previous_key(Some('Z')), None);
        assert_eq!(delegate.try_next_key(Some('Z')), Ok(None));
    }

    #[test]
    fn disabled_origin_still_moves() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys(['B']);

        assert_eq!(delegate.next_key(Some('B')), Some('C'));
        assert_eq!(delegate.previous_key(Some('B')), Some('A'));
    }

    #[test]
    fn last_key_searches_backward() {
        let list = abcd();
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys(['C', 'D']);

        assert_eq!(delegate.last_key(), Some('B'));
        assert_eq!(delegate.first_key(), Some('A'));
    }

    #[test]
    fn first_key_wraps_past_disabled_prefix() {
        let list = abcd();
        let delegate =
            LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys(['A', 'B', 'C']);

        assert_eq!(delegate.first_key(), Some('D'));
        assert_eq!(delegate.last_key(), Some('D'));
    }

    #[test]
    fn replacing_disabled_keys_recomputes_state() {
        let list = ListCollection::from_keys([1_u32, 2]);
        let delegate = LinearDelegate::new(&list, HORIZONTAL_LTR).with_disabled_keys([1, 2]);
        assert!(delegate.all_disabled());

        let delegate = delegate.with_disabled_keys([1]);
        assert!(!delegate.all_disabled());
        assert_eq!(delegate.first_key(), Some(2));
    }

    /// First key 2 leads into a 0 <-> 1 loop that never ends.
    #[derive(Debug)]
    struct Looping;

    impl Collection for Looping {
        type Key = u8;

        fn len(&self) -> usize {
            3
        }

        fn first_key(&self) -> Option<u8> {
            Some(2)
        }

        fn last_key(&self) -> Option<u8> {
            Some(1)
        }

        fn key_after(&self, key: u8) -> Option<u8> {
            Some(if key == 0 { 1 } else { 0 })
        }

        fn key_before(&self, key: u8) -> Option<u8> {
            Some(if key == 0 { 1 } else { 0 })
        }
    }

    #[test]
    fn cyclic_collection_is_reported() {
        let delegate = LinearDelegate::new(Looping, HORIZONTAL_LTR).with_disabled_keys([0, 1]);

        assert!(!delegate.all_disabled());
        assert_eq!(
            delegate.try_next_key(Some(0)),
            Err(TraversalError::Unbounded { steps: 4 })
        );
        assert_eq!(
            delegate.try_previous_key(Some(1)),
            Err(TraversalError::Unbounded { steps: 4 })
        );
        assert_eq!(delegate.next_key(Some(0)), None);
        assert_eq!(delegate.last_key(), None);
    }

    #[test]
    fn owned_collection() {
        let delegate = LinearDelegate::new(abcd(), DelegateOptions::default());
        assert_eq!(delegate.options(), HORIZONTAL_LTR);
        assert_eq!(delegate.collection().len(), 4);
        assert_eq!(delegate.clone().key_right_of(Some('D')), Some('A'));
    }
}
