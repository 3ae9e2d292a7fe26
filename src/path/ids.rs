//! Stable identifiers for paths and points
//!
//! Callers that hold on to a selection or a dragged point keep one of these
//! ids, never an index, because simplification and smoothing routinely
//! replace a path's whole point sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_raw_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Unique identifier of a [`PathPoint`](super::PathPoint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(u64);

/// Unique identifier of a [`GlyphPath`](super::GlyphPath)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(u64);

impl PointId {
    /// Mint a fresh point id
    pub fn next() -> Self {
        Self(next_raw_id())
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl PathId {
    /// Mint a fresh path id
    pub fn next() -> Self {
        Self(next_raw_id())
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pt{}", self.0)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path{}", self.0)
    }
}
