// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit modes.
//!
//! Places the same landscape plate in a portrait view under every scale mode
//! and shows where the image lands and how one tap normalizes under each edge
//! policy.
//!
//! Run:
//! - `cargo run -p withers_demos --example fit_modes`

use kurbo::{Affine, Point, Size, Vec2};
use withers_fit::{EdgePolicy, ImageView, ScaleMode};

fn main() {
    let image = Size::new(1200.0, 900.0);
    let view = Size::new(390.0, 844.0);
    let tap = Point::new(195.0, 200.0);

    let modes = [
        ("fit-center", ScaleMode::FitCenter),
        ("center-crop", ScaleMode::CenterCrop),
        ("center", ScaleMode::Center),
        ("fit-xy", ScaleMode::FitXY),
        (
            "pinch-zoomed",
            ScaleMode::Matrix(Affine::scale(0.6).then_translate(Vec2::new(-150.0, 150.0))),
        ),
    ];

    for (name, mode) in modes {
        let mut iv = ImageView::new(view).with_image(image).with_scale_mode(mode);
        let Some(t) = iv.transform() else {
            println!("{name:>13}: degenerate");
            continue;
        };
        let bounds = t.image_bounds();
        let rejected = iv.screen_to_normalized(tap);
        iv.set_edge_policy(EdgePolicy::Clamp);
        let clamped = iv.screen_to_normalized(tap);
        println!("{name:>13}: image at {bounds:.1?}, tap {tap:?}");
        println!("{:>13}  reject {rejected:.3?}, clamp {clamped:.3?}", "");
    }
}
