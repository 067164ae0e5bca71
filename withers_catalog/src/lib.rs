// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Withers Catalog: region and entity data for touch surfaces.
//!
//! A catalog is a JSON document listing illustrated regions, each with its
//! intrinsic image size and an ordered list of hotspot entities:
//!
//! ```json
//! { "regions": [ {
//!     "key": "forelimb",
//!     "title": "Forelimb, lateral",
//!     "image": { "width": 1000.0, "height": 800.0 },
//!     "entities": [ { "id": 1, "name": "Triceps brachii", "anchor_x": 0.5, "anchor_y": 0.5 } ]
//! } ] }
//! ```
//!
//! [`Catalog::from_json`] rejects documents the surface could not use
//! sensibly: anchors outside the unit square, repeated ids or region keys, and
//! empty images. Anchors closer together than the touch tolerance are legal,
//! but [`Catalog::lint`] logs them as warnings since taps between them resolve
//! by list order rather than by intent.
//!
//! # Example
//!
//! ```rust
//! use withers_anchor::Tolerance;
//! use withers_catalog::Catalog;
//!
//! let catalog = Catalog::from_json(r#"{ "regions": [ {
//!     "key": "croup", "title": "Croup",
//!     "image": { "width": 640.0, "height": 480.0 },
//!     "entities": [
//!         { "id": 1, "name": "Gluteus superficialis", "anchor_x": 0.40, "anchor_y": 0.35 },
//!         { "id": 2, "name": "Tensor fasciae latae", "anchor_x": 0.44, "anchor_y": 0.35 }
//!     ] } ] }"#)?;
//!
//! let croup = catalog.region("croup").unwrap();
//! assert_eq!(croup.ambiguous_pairs(Tolerance::DEFAULT).len(), 1);
//! # Ok::<(), withers_catalog::CatalogError>(())
//! ```

mod error;
mod model;

pub use error::CatalogError;
pub use model::{AmbiguousPair, Catalog, Region};
