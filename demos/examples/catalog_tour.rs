// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog tour.
//!
//! Loads the bundled atlas, lints it for anchors that sit closer together than
//! the touch tolerance, then binds each region to a phone-sized surface and
//! taps every anchor through the display transform.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p withers_demos --example catalog_tour`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::Size;
use tracing::info;
use tracing_subscriber::EnvFilter;
use withers_anchor::Anchored;
use withers_catalog::{Catalog, CatalogError};
use withers_surface::{InteractionSurface, SurfaceConfig, TouchEvent};

const ATLAS: &str = include_str!("../data/atlas.json");

fn main() -> Result<(), CatalogError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::from_json(ATLAS)?;
    let config = SurfaceConfig::default();
    let ambiguous = catalog.lint(config.touch_tolerance);
    info!(regions = catalog.regions().len(), ambiguous, "atlas loaded");

    let mut surface: InteractionSurface = InteractionSurface::new(config);
    // Portrait phone with letterboxing above and below the illustration.
    surface.set_view_size(Size::new(390.0, 844.0));

    let picked = Rc::new(RefCell::new(Vec::new()));
    for region in catalog.regions() {
        let sink = picked.clone();
        region.bind_surface(&mut surface, move |e| {
            sink.borrow_mut().push(e.name.clone());
        });
        println!("{} ({} hotspots)", region.title, region.entities.len());

        let mut t = Duration::ZERO;
        for entity in &region.entities {
            let Some(at) = surface.view().normalized_to_screen(entity.anchor()) else {
                continue;
            };
            t += Duration::from_secs(1);
            surface.handle_touch(TouchEvent::down(at, t));
            let outcome = surface.handle_touch(TouchEvent::up(at, t));
            println!(
                "  tap {:<28} at {:>6.1},{:>6.1} => {:?}",
                entity.name, at.x, at.y, outcome
            );
        }
        // A tap in the letterbox band above the image.
        surface.handle_touch(TouchEvent::down((195.0, 10.0), t));
        let outcome = surface.handle_touch(TouchEvent::up((195.0, 10.0), t));
        println!("  tap letterbox => {outcome:?}");
    }

    println!("selected: {:?}", picked.borrow());
    println!("\nround-tripped catalog:\n{}", catalog.to_json_pretty()?);
    Ok(())
}
