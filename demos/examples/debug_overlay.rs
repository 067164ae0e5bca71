// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug overlay.
//!
//! Wraps a surface in the developer overlay, logs every sample through
//! `tracing`, and lists the primitives a renderer would draw after a miss.
//!
//! Run:
//! - `RUST_LOG=withers_surface=debug cargo run -p withers_demos --example debug_overlay`

use std::time::Duration;

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use withers_surface::debug::{DebugOverlay, OverlayConfig, OverlayLayers};
use withers_surface::{AnatomicalEntity, InteractionSurface, SurfaceConfig, TouchEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut surface: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
    surface.set_image(Some(Size::new(960.0, 640.0)));
    surface.set_view_size(Size::new(480.0, 480.0));

    let mut overlay = DebugOverlay::new(surface, OverlayConfig::default().with_enabled(true));
    overlay.bind(
        vec![
            AnatomicalEntity::new(1, "Splenius", 0.35, 0.28),
            AnatomicalEntity::new(2, "Brachiocephalicus", 0.50, 0.55),
        ],
        |e| println!("selected {}", e.name),
    );

    let ms = Duration::from_millis;
    for (at, t) in [((240.0, 220.0), 0), ((30.0, 300.0), 1_000)] {
        overlay.handle_touch(TouchEvent::down(at, ms(t)));
        overlay.handle_touch(TouchEvent::up(at, ms(t + 40)));
    }

    for p in overlay.primitives() {
        println!("{p:?}");
    }

    overlay.set_config(
        OverlayConfig::default()
            .with_enabled(true)
            .with_layers(OverlayLayers::TOUCHES),
    );
    println!("touches only: {:?}", overlay.primitives());

    overlay.advance(ms(3_100));
    println!("after expiry: {:?}", overlay.primitives());
    println!("damage: {:?}", overlay.take_damage());
}
