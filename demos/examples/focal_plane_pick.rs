// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking detector centers on a focal plane.
//!
//! Loads tree parameters from TOML, fits a picker to a hexagonal grid of
//! detector centers, then replays a pointer path with hover transitions and
//! a drag selection.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p speckle_demos --example focal_plane_pick`

use kurbo::{Point, Rect};
use speckle_pick::Picker;
use speckle_pick::hover::HoverState;
use speckle_quadtree::QuadtreeConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SETTINGS: &str = r#"
max_depth = 6
capacity = 4
"#;

/// Detector centers on a hexagonal grid with unit pitch.
fn detectors(rows: u32, cols: u32) -> Vec<(u32, Point)> {
    let dy = 3.0_f64.sqrt() / 2.0;
    let mut out = Vec::new();
    for r in 0..rows {
        let offset = if r % 2 == 0 { 0.0 } else { 0.5 };
        for c in 0..cols {
            let p = Point::new(f64::from(c) + offset, f64::from(r) * dy);
            out.push((r * cols + c, p));
        }
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config: QuadtreeConfig = match toml::from_str(SETTINGS) {
        Ok(config) => config,
        Err(e) => {
            warn!("bad settings, using defaults: {e}");
            QuadtreeConfig::default()
        }
    };

    let picker = match Picker::fit(config, detectors(32, 32)) {
        Ok(picker) => picker,
        Err(e) => {
            warn!("cannot build picker: {e}");
            return;
        }
    };
    info!("indexed {} detectors over {:?}", picker.len(), picker.bounds());

    let mut hover = HoverState::new();
    for step in 0..12 {
        let pointer = Point::new(3.0 + f64::from(step) * 0.37, 4.1);
        let events = picker.update_hover(&mut hover, pointer, 0.3, |e| e.payload);
        if !events.is_empty() {
            info!("pointer {:?}: {:?}", pointer, events);
        }
    }
    info!("leaving the plane: {:?}", hover.clear());

    // Drag from lower right to upper left.
    let mut selected: Vec<u32> = picker
        .select(Rect::new(6.2, 3.1, 4.0, 1.2))
        .into_iter()
        .copied()
        .collect();
    selected.sort_unstable();
    info!("selected {} detectors: {:?}", selected.len(), selected);
}
