// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speckle Pick: pointer picking and rectangle selection for plotted points.
//!
//! ## Overview
//!
//! This crate is the layer between an interactive view and a
//! [`speckle_quadtree::Quadtree`]. It does not render and does not own input
//! handling. Feed it data-space points and pointer positions; it answers
//! "what is under the pointer" and "what is inside the drag rectangle".
//!
//! - [`Picker`] owns the tree over fixed bounds and keeps counts alongside it.
//! - [`Picker::pick`] finds the nearest element within a pick radius.
//! - [`Picker::select`] collects every payload inside a selection rectangle,
//!   whichever corner the drag started from.
//! - [`hover::HoverState`] turns successive picks into enter/leave transitions.
//!
//! ## Rebuilding
//!
//! The quadtree has no removal. When the plotted data changes, call
//! [`Picker::rebuild`] (same bounds) or [`Picker::rebuild_with_bounds`], or
//! construct a fresh picker with [`Picker::fit`] to size the bounds from the
//! data itself.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use speckle_pick::Picker;
//! use speckle_pick::hover::{HoverEvent, HoverState};
//! use speckle_quadtree::QuadtreeConfig;
//!
//! let samples = [
//!     (0_u32, Point::new(1.0, 4.0)),
//!     (1, Point::new(2.0, 9.0)),
//!     (2, Point::new(3.0, 1.0)),
//! ];
//! let picker = Picker::fit(QuadtreeConfig::default(), samples).unwrap();
//! assert_eq!(picker.len(), 3);
//!
//! // Pointer lands near the second sample.
//! let hit = picker.pick(Point::new(2.1, 8.8), 0.5).unwrap();
//! assert_eq!(hit.payload, 1);
//!
//! // Drag from bottom-right to top-left.
//! let mut selected = picker.select(Rect::new(3.0, 5.0, 0.0, 0.0));
//! selected.sort();
//! assert_eq!(selected, vec![&0, &2]);
//!
//! let mut hover = HoverState::new();
//! let events = picker.update_hover(&mut hover, Point::new(3.0, 1.2), 0.5, |e| e.payload);
//! assert_eq!(events, vec![HoverEvent::Enter(2)]);
//! ```

#![no_std]

extern crate alloc;

pub mod error;
pub mod hover;
pub mod picker;

pub use error::PickError;
pub use picker::{FIT_PADDING, Picker};
