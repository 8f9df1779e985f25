// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions as the picked element changes.
//!
//! ## Usage
//!
//! 1) On each pointer move, pick with [`Picker::pick`](crate::Picker::pick).
//! 2) Map the hit (if any) to a stable key, such as a series/point id.
//! 3) Call [`HoverState::update`] with that key to get `Leave(..)` / `Enter(..)` transitions.
//!
//! [`Picker::update_hover`](crate::Picker::update_hover) does all three at once.
//!
//! ## Minimal example
//!
//! ```
//! use speckle_pick::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.update(Some(3)), vec![HoverEvent::Leave(1), HoverEvent::Enter(3)]);
//! assert_eq!(h.update(None), vec![HoverEvent::Leave(3)]);
//! ```

use alloc::vec::Vec;

/// Tracks the currently hovered key.
///
/// When updated with a new key, emits the leave for the old key (if any)
/// followed by the enter for the new key (if any). Re-hovering the same key
/// emits nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Option<K>,
}

/// A hover transition event.
///
/// Returned by [`HoverState::update`] and [`HoverState::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer starts hovering the given key.
    Enter(K),
    /// Pointer stops hovering the given key.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The key currently hovered, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Stop hovering, returning the leave event for the current key.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update(None)
    }

    /// Move the hover to `next` and return the transitions in order: leave, then enter.
    pub fn update(&mut self, next: Option<K>) -> Vec<HoverEvent<K>> {
        let mut out = Vec::new();
        if self.current == next {
            return out;
        }
        if let Some(old) = self.current {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = next {
            out.push(HoverEvent::Enter(new));
        }
        self.current = next;
        out
    }
}
