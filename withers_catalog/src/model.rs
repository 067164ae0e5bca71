// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regions, catalogs, and validation.

use std::collections::HashSet;
use std::io::Read;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use withers_anchor::{AnchorIndex, Anchored, Backend, Tolerance};
use withers_surface::{AnatomicalEntity, InteractionSurface};

use crate::error::CatalogError;

/// One illustrated anatomical region and its hotspots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Stable key, unique within the catalog.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Intrinsic illustration size in pixels.
    pub image: Size,
    /// Hotspots in display order. Order decides equidistant ties.
    pub entities: Vec<AnatomicalEntity>,
}

/// Two entities whose anchors are closer together than the touch tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AmbiguousPair {
    /// Id of the entity listed first.
    pub first: u32,
    /// Id of the entity listed later.
    pub second: u32,
    /// Normalized distance between the anchors.
    pub distance: f64,
}

impl Region {
    /// Look up an entity by id.
    pub fn entity(&self, id: u32) -> Option<&AnatomicalEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Pairs of entities a tap could land between.
    ///
    /// Ordered by the first entity's position, then by distance.
    pub fn ambiguous_pairs(&self, tolerance: Tolerance) -> Vec<AmbiguousPair> {
        let index: AnchorIndex<usize> = self
            .entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.anchor(), i))
            .collect();
        let mut out = Vec::new();
        for (i, e) in self.entities.iter().enumerate() {
            for (hit, j) in index.within(e.anchor(), tolerance) {
                if j > i {
                    out.push(AmbiguousPair {
                        first: e.id,
                        second: self.entities[j].id,
                        distance: hit.distance,
                    });
                }
            }
        }
        out
    }

    /// Point `surface` at this region's illustration and bind its entities.
    pub fn bind_surface<B, F>(
        &self,
        surface: &mut InteractionSurface<AnatomicalEntity, B>,
        on_select: F,
    ) where
        B: Backend,
        F: FnMut(&AnatomicalEntity) + 'static,
    {
        surface.set_image(Some(self.image));
        surface.bind(self.entities.iter().cloned(), on_select);
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let Size { width, height } = self.image;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CatalogError::InvalidImage {
                region: self.key.clone(),
                width,
                height,
            });
        }
        let mut ids = HashSet::with_capacity(self.entities.len());
        for e in &self.entities {
            let unit = 0.0..=1.0;
            if !(unit.contains(&e.anchor_x) && unit.contains(&e.anchor_y)) {
                return Err(CatalogError::AnchorOutOfRange {
                    region: self.key.clone(),
                    id: e.id,
                    x: e.anchor_x,
                    y: e.anchor_y,
                });
            }
            if !ids.insert(e.id) {
                return Err(CatalogError::DuplicateId {
                    region: self.key.clone(),
                    id: e.id,
                });
            }
        }
        Ok(())
    }
}

/// A validated set of regions.
///
/// Every region has a positive image size, every anchor lies in [0,1]², entity
/// ids are unique per region and region keys are unique. Deserializing through
/// any serde format runs the same checks as [`Catalog::from_regions`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    regions: Vec<Region>,
}

/// Catalog document as parsed, before validation.
#[derive(Deserialize)]
struct RawCatalog {
    regions: Vec<Region>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::checked(raw)
    }
}

impl Catalog {
    /// Validate `regions` into a catalog.
    pub fn from_regions(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let mut keys = HashSet::with_capacity(regions.len());
        for r in &regions {
            r.validate()?;
            if !keys.insert(r.key.as_str()) {
                return Err(CatalogError::DuplicateRegion { key: r.key.clone() });
            }
        }
        Ok(Self { regions })
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::checked(raw)
    }

    /// Parse and validate a JSON document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_reader(reader)?;
        Self::checked(raw)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All regions, in document order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a region by key.
    pub fn region(&self, key: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.key == key)
    }

    /// Warn about every ambiguous anchor pair under `tolerance`.
    ///
    /// Returns how many pairs were found across all regions.
    pub fn lint(&self, tolerance: Tolerance) -> usize {
        let mut total = 0;
        for r in &self.regions {
            for p in r.ambiguous_pairs(tolerance) {
                warn!(
                    region = %r.key,
                    first = p.first,
                    second = p.second,
                    distance = p.distance,
                    tolerance = tolerance.get(),
                    "anchors closer than touch tolerance; ties resolve to the first"
                );
                total += 1;
            }
        }
        total
    }

    fn checked(raw: RawCatalog) -> Result<Self, CatalogError> {
        let catalog = Self::from_regions(raw.regions)?;
        debug!(
            regions = catalog.regions.len(),
            entities = catalog
                .regions
                .iter()
                .map(|r| r.entities.len())
                .sum::<usize>(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
