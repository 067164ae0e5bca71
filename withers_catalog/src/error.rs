// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog load and validation errors.

use thiserror::Error;

/// Why a catalog was rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid JSON or does not have the catalog shape.
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An anchor is non-finite or outside the unit square.
    #[error("region `{region}`: entity {id} anchor ({x}, {y}) lies outside [0,1]²")]
    AnchorOutOfRange {
        /// Region key.
        region: String,
        /// Entity id.
        id: u32,
        /// Offending anchor x.
        x: f64,
        /// Offending anchor y.
        y: f64,
    },

    /// Two entities in one region share an id.
    #[error("region `{region}`: duplicate entity id {id}")]
    DuplicateId {
        /// Region key.
        region: String,
        /// The repeated id.
        id: u32,
    },

    /// Two regions share a key.
    #[error("duplicate region key `{key}`")]
    DuplicateRegion {
        /// The repeated key.
        key: String,
    },

    /// A region's illustration size is empty or non-finite.
    #[error("region `{region}`: image size {width}x{height} is not positive and finite")]
    InvalidImage {
        /// Region key.
        region: String,
        /// Declared width.
        width: f64,
        /// Declared height.
        height: f64,
    },
}
