// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface basics.
//!
//! Binds a few hotspots to a half-scale illustration, feeds a scripted
//! sequence of touch samples, and prints each outcome, the highlight the
//! renderer would draw, and the redraw regions.
//!
//! Run:
//! - `cargo run -p withers_demos --example surface_basics`

use std::time::Duration;

use kurbo::Size;
use withers_surface::{AnatomicalEntity, InteractionSurface, MovePolicy, SurfaceConfig, TouchEvent};

fn main() {
    let config = SurfaceConfig::default().with_move_policy(MovePolicy::Reresolve);
    let mut surface: InteractionSurface = InteractionSurface::new(config);
    surface.set_image(Some(Size::new(1000.0, 800.0)));
    surface.set_view_size(Size::new(500.0, 400.0));
    surface.bind(
        vec![
            AnatomicalEntity::new(1, "Longissimus dorsi", 0.50, 0.50),
            AnatomicalEntity::new(2, "Latissimus dorsi", 0.30, 0.30),
            AnatomicalEntity::new(3, "Serratus ventralis", 0.32, 0.30),
        ],
        |e| println!("  -> selected #{} {}", e.id, e.name),
    );
    println!("bind damage: {:?}", surface.take_damage());

    let ms = Duration::from_millis;
    let script = [
        // Exact centre: selects #1.
        TouchEvent::down((250.0, 200.0), ms(0)),
        TouchEvent::up((250.0, 200.0), ms(80)),
        // 40px right is 0.08 normalized: a miss.
        TouchEvent::down((290.0, 200.0), ms(1_000)),
        TouchEvent::up((290.0, 200.0), ms(1_060)),
        // Slide from empty space onto #1 and lift.
        TouchEvent::down((100.0, 380.0), ms(2_000)),
        TouchEvent::moved((180.0, 300.0), ms(2_030)),
        TouchEvent::moved((248.0, 203.0), ms(2_060)),
        TouchEvent::up((248.0, 203.0), ms(2_090)),
        // Equidistant from #2 and #3: the first listed wins.
        TouchEvent::down((155.0, 120.0), ms(3_000)),
        TouchEvent::up((155.0, 120.0), ms(3_050)),
        // Cancelled gesture: no selection.
        TouchEvent::down((250.0, 200.0), ms(4_000)),
        TouchEvent::cancel((250.0, 200.0), ms(4_020)),
    ];

    for ev in script {
        if surface.advance(ev.time) {
            println!("{:>6?}  highlight expired", ev.time);
        }
        let outcome = surface.handle_touch(ev);
        println!(
            "{:>6?}  {:?} at ({}, {}) => {:?}, state {:?}",
            ev.time,
            ev.phase,
            ev.position.x,
            ev.position.y,
            outcome,
            surface.state()
        );
        if let Some(h) = surface.highlight() {
            println!(
                "        highlight {:?} on {} at {:?}, radii {:?}",
                h.kind,
                h.entity.name,
                h.ellipse.center(),
                h.ellipse.radii()
            );
        }
        let damage = surface.take_damage();
        if !damage.is_empty() {
            println!("        repaint {:?}", damage.union_rect());
        }
    }

    surface.unbind();
    surface.unbind();
    println!("unbound: {} entities, bound = {}", surface.entities().len(), surface.is_bound());
}
