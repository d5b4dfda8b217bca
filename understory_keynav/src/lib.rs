// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_keynav --heading-base-level=0

//! Understory Keynav: keyboard navigation delegates for linear widgets.
//!
//! Toolbars, action groups, step lists and segmented controls all need the
//! same arrow-key behavior: move to the neighboring item, wrap around at the
//! ends, skip items that are disabled, and swap left/right in right-to-left
//! layouts. This crate provides that behavior over any ordered collection of
//! keys, without tying it to a particular widget tree or renderer.
//!
//! - [`Collection`]: the read-only ordered view the host provides (first,
//!   last, successor, predecessor). [`ListCollection`] is an array-backed
//!   implementation.
//! - [`LinearDelegate`]: answers "which key gets focus" for left, right, up,
//!   down, first and last, given a [`Direction`] and [`Orientation`] in
//!   [`DelegateOptions`] and a set of disabled keys.
//! - [`KeyboardDelegate`] and [`Navigation`]: a host-facing trait and intent
//!   enum so event handling code can stay generic over delegate types.
//!
//! ## Example
//!
//! ```rust
//! use understory_keynav::{
//!     DelegateOptions, Direction, LinearDelegate, ListCollection, Orientation,
//! };
//!
//! let items = ListCollection::from_keys(['A', 'B', 'C', 'D']);
//! let delegate = LinearDelegate::new(&items, DelegateOptions::default())
//!     .with_disabled_keys(['A', 'C']);
//!
//! assert_eq!(delegate.first_key(), Some('B'));
//! // Disabled keys are skipped…
//! assert_eq!(delegate.key_right_of(Some('B')), Some('D'));
//! // …and traversal wraps around.
//! assert_eq!(delegate.key_right_of(Some('D')), Some('B'));
//!
//! // In a right-to-left row, Left moves forward through the collection.
//! let rtl = LinearDelegate::new(
//!     &items,
//!     DelegateOptions {
//!         direction: Direction::Rtl,
//!         orientation: Orientation::Horizontal,
//!     },
//! );
//! assert_eq!(rtl.key_left_of(Some('A')), Some('B'));
//! ```
//!
//! ## Lifetime of a delegate
//!
//! A delegate is an immutable snapshot. It records whether every key is
//! disabled when it is built, so that traversal never spins looking for an
//! enabled key. If the collection, the disabled set, or the layout changes,
//! build a new delegate; construction scans the collection once.
//!
//! Collections must be finite, and their successor function must reach the
//! end. A collection that violates this is detected after `len() + 1` steps:
//! [`LinearDelegate::try_next_key`] reports [`TraversalError::Unbounded`],
//! and the infallible queries log a warning through [`log`] and return `None`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod delegate;
mod navigation;

pub use collection::{Collection, Keys, ListCollection};
pub use delegate::{DelegateOptions, Direction, LinearDelegate, Orientation, TraversalError};
pub use navigation::{KeyboardDelegate, Navigation};
