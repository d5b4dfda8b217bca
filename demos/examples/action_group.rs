// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key focus in an action group and a step list.
//!
//! This example shows how to:
//! - drive a toolbar with [`LinearDelegate`] over a [`ListCollection`],
//! - swap left/right for a right-to-left layout,
//! - implement [`Collection`] directly on host data (a step list) so the
//!   delegate reads it without copying keys.
//!
//! Run:
//! - `cargo run -p understory_demos --example action_group`

use understory_keynav::{
    Collection, DelegateOptions, Direction, KeyboardDelegate, LinearDelegate, ListCollection,
    Navigation, Orientation,
};

/// Replays key presses and prints where focus lands.
fn replay<D>(label: &str, delegate: &D, presses: &[Navigation])
where
    D: KeyboardDelegate,
    D::Key: core::fmt::Debug,
{
    println!("== {label}");
    let mut focus = None;
    for &intent in presses {
        focus = delegate.navigate(intent, focus);
        println!("  {intent:?} -> {focus:?}");
    }
}

/// A step in a wizard. Steps after the current one are not reachable yet.
#[derive(Debug)]
struct Step {
    id: u32,
    title: &'static str,
}

/// Host-owned step list; keys are step ids.
struct StepList {
    steps: Vec<Step>,
}

impl StepList {
    fn index_of(&self, id: u32) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }
}

impl Collection for StepList {
    type Key = u32;

    fn len(&self) -> usize {
        self.steps.len()
    }

    fn first_key(&self) -> Option<u32> {
        self.steps.first().map(|s| s.id)
    }

    fn last_key(&self) -> Option<u32> {
        self.steps.last().map(|s| s.id)
    }

    fn key_after(&self, key: u32) -> Option<u32> {
        let i = self.index_of(key)?;
        self.steps.get(i + 1).map(|s| s.id)
    }

    fn key_before(&self, key: u32) -> Option<u32> {
        let i = self.index_of(key)?;
        self.steps.get(i.checked_sub(1)?).map(|s| s.id)
    }
}

fn main() {
    let toolbar = ListCollection::from_keys(["cut", "copy", "paste", "delete"]);
    let presses = [
        Navigation::First,
        Navigation::Right,
        Navigation::Right,
        Navigation::Right,
        Navigation::Left,
        Navigation::Last,
    ];

    // Nothing on the clipboard, so "paste" is disabled.
    let ltr = LinearDelegate::new(&toolbar, DelegateOptions::default())
        .with_disabled_keys(["paste"]);
    replay("toolbar (ltr)", &ltr, &presses);

    let rtl = LinearDelegate::new(
        &toolbar,
        DelegateOptions {
            direction: Direction::Rtl,
            orientation: Orientation::Horizontal,
        },
    )
    .with_disabled_keys(["paste"]);
    replay("toolbar (rtl)", &rtl, &presses);

    let steps = StepList {
        steps: vec![
            Step { id: 10, title: "Account" },
            Step { id: 20, title: "Profile" },
            Step { id: 30, title: "Billing" },
            Step { id: 40, title: "Review" },
        ],
    };
    let current = 20;
    let locked: Vec<u32> = steps.steps.iter().map(|s| s.id).filter(|&id| id > current).collect();
    let vertical = LinearDelegate::new(
        &steps,
        DelegateOptions {
            direction: Direction::Rtl,
            orientation: Orientation::Vertical,
        },
    )
    .with_disabled_keys(locked);
    replay(
        "step list (vertical)",
        &vertical,
        &[Navigation::Down, Navigation::Down, Navigation::Down, Navigation::Up],
    );

    for step in &steps.steps {
        let state = if vertical.is_disabled(step.id) { "locked" } else { "open" };
        println!("  step {} {:<8} {state}", step.id, step.title);
    }
}
