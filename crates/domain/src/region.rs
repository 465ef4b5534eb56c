// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Region dataset and city-name longitude lookup.
//!
//! The region tree is loaded once and flattened into a pre-order index so a
//! lookup is a single linear scan with no recursion.
//!
//! ## Lookup rules
//!
//! - Surrounding whitespace of the query is ignored
//! - A region matches when its name contains the query (`"深圳"` matches `"深圳市"`)
//! - The first city-level match wins
//! - Otherwise the first province-level match wins
//! - Otherwise the first match in pre-order wins
//! - No match (or a blank query) resolves to the reference meridian, 120°E

use crate::error::DomainError;
use crate::solar_time::REFERENCE_LONGITUDE;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use tracing::{debug, warn};

/// Administrative level of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    /// Country.
    Country,
    /// Province, autonomous region or municipality.
    Province,
    /// Prefecture-level city.
    City,
    /// County-level district.
    District,
}

/// Geographic center of a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    /// Degrees east.
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
    /// Degrees north.
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
}

/// A node of the region tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionNode {
    /// Region name, e.g. `"深圳市"`.
    pub name: String,
    /// Administrative level.
    pub level: RegionLevel,
    /// Geographic center.
    pub center: Center,
    /// Sub-regions in document order.
    #[serde(default, alias = "districts")]
    pub children: Vec<Self>,
}

/// Root of a region document: either a bare list or a wrapping object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegionDocument {
    Nodes(Vec<RegionNode>),
    Root {
        #[serde(alias = "districts")]
        children: Vec<RegionNode>,
    },
}

/// Accepts a coordinate written either as a JSON number or a numeric string.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value: f64 = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom)?,
    };
    if !value.is_finite() {
        return Err(serde::de::Error::custom("coordinate must be a finite number"));
    }
    Ok(value)
}

/// A region that satisfied a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMatch {
    /// The region name.
    pub name: String,
    /// The region level.
    pub level: RegionLevel,
}

/// Outcome of a longitude lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongitudeResult {
    /// Degrees east.
    pub longitude: f64,
    /// The region the longitude came from. `None` means the default was used.
    pub matched: Option<RegionMatch>,
}

/// One entry of the flattened index.
#[derive(Debug, Clone)]
struct IndexedRegion {
    name: String,
    level: RegionLevel,
    longitude: f64,
}

/// Immutable, flattened view of the region tree.
///
/// `RegionIndex` is `Send + Sync`; share one instance (e.g. behind an `Arc`)
/// between all lookups.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    roots: Vec<RegionNode>,
    entries: Vec<IndexedRegion>,
}

impl RegionIndex {
    /// Builds an index from root nodes.
    #[must_use]
    pub fn from_nodes(roots: Vec<RegionNode>) -> Self {
        let mut entries: Vec<IndexedRegion> = Vec::new();
        let mut stack: Vec<&RegionNode> = roots.iter().rev().collect();

        while let Some(node) = stack.pop() {
            entries.push(IndexedRegion {
                name: node.name.clone(),
                level: node.level,
                longitude: node.center.longitude,
            });
            stack.extend(node.children.iter().rev());
        }

        debug!(regions = entries.len(), "Built region index");
        Self { roots, entries }
    }

    /// Parses a region document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid region tree.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let document: RegionDocument =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidRegionData {
                reason: e.to_string(),
            })?;
        Ok(Self::from_document(document))
    }

    /// Reads and parses a region document.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the document is not a valid region tree.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomainError> {
        let document: RegionDocument =
            serde_json::from_reader(reader).map_err(|e| DomainError::InvalidRegionData {
                reason: e.to_string(),
            })?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: RegionDocument) -> Self {
        match document {
            RegionDocument::Nodes(nodes) | RegionDocument::Root { children: nodes } => {
                Self::from_nodes(nodes)
            }
        }
    }

    /// Returns the root nodes of the tree.
    #[must_use]
    pub fn roots(&self) -> &[RegionNode] {
        &self.roots
    }

    /// Returns the number of regions in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the tree has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a city name to a longitude.
    ///
    /// Never fails: an unknown city yields 120.0.
    #[must_use]
    pub fn resolve_longitude(&self, city_name: &str) -> f64 {
        self.resolve(city_name).longitude
    }

    /// Resolves a city name and reports which region, if any, supplied the longitude.
    #[must_use]
    pub fn resolve(&self, city_name: &str) -> LongitudeResult {
        let query: &str = city_name.trim();
        if query.is_empty() {
            warn!("Empty city name, using reference meridian");
            return Self::fallback();
        }

        let matches: Vec<&IndexedRegion> = self
            .entries
            .iter()
            .filter(|entry| entry.name.contains(query))
            .collect();

        let chosen: Option<&IndexedRegion> = matches
            .iter()
            .find(|entry| entry.level == RegionLevel::City)
            .or_else(|| {
                matches
                    .iter()
                    .find(|entry| entry.level == RegionLevel::Province)
            })
            .or_else(|| matches.first())
            .copied();

        match chosen {
            Some(entry) => {
                debug!(
                    query,
                    candidates = matches.len(),
                    region = %entry.name,
                    longitude = entry.longitude,
                    "Resolved longitude"
                );
                LongitudeResult {
                    longitude: entry.longitude,
                    matched: Some(RegionMatch {
                        name: entry.name.clone(),
                        level: entry.level,
                    }),
                }
            }
            None => {
                warn!(query, "No region matched, using reference meridian");
                Self::fallback()
            }
        }
    }

    const fn fallback() -> LongitudeResult {
        LongitudeResult {
            longitude: REFERENCE_LONGITUDE,
            matched: None,
        }
    }
}
