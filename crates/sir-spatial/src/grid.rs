//! Uniform hash-grid detector.
//!
//! Infectious agents are bucketed by `floor(x / cell), floor(y / cell)`.
//! With `cell > r`, any point within `r` of a query lies in the query's own
//! cell or one of its eight neighbours, so only those nine buckets are
//! scanned.  Only the infectious snapshot is bucketed, which is usually a
//! small fraction of the population, hence a sparse map rather than a dense
//! array over the domain.

use sir_core::{AgentId, Point};

use crate::{Contact, ContactDetector, ContactQuery, SpatialError, SpatialResult};

#[cfg(not(feature = "fx-hash"))]
type CellMap = std::collections::HashMap<CellKey, Vec<AgentId>>;
#[cfg(feature = "fx-hash")]
type CellMap = rustc_hash::FxHashMap<CellKey, Vec<AgentId>>;

type CellKey = (i64, i64);

/// Relative margin by which the effective cell size exceeds `r`, so that
/// rounding in `x / cell` can never push a pair at distance exactly `r`
/// two cells apart.
const CELL_MARGIN: f64 = 1e-6;

/// Cell size used when the radius is zero (only coincident points can be in
/// contact, so any positive size is correct).
const ZERO_RADIUS_CELL: f64 = 1.0;

/// Hash-grid contact detector.
#[derive(Clone, Debug, Default)]
pub struct UniformGrid {
    /// Requested minimum cell size; `None` means "derive from the radius".
    min_cell: Option<f64>,
    cells:    CellMap,
}

impl UniformGrid {
    /// Grid whose cell size tracks the query radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid with cells at least `cell_size` wide.  Queries whose radius
    /// exceeds `cell_size` still get cells slightly larger than the radius.
    pub fn with_cell_size(cell_size: f64) -> SpatialResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        Ok(Self { min_cell: Some(cell_size), cells: CellMap::default() })
    }

    /// The cell size a query with `radius` will use.
    pub fn cell_size_for(&self, radius: f64) -> f64 {
        let from_radius = if radius > 0.0 {
            radius * (1.0 + CELL_MARGIN)
        } else {
            ZERO_RADIUS_CELL
        };
        match self.min_cell {
            Some(c) => c.max(from_radius),
            None => from_radius,
        }
    }

    #[inline]
    fn key(p: Point, cell: f64) -> CellKey {
        ((p.x / cell).floor() as i64, (p.y / cell).floor() as i64)
    }
}

impl ContactDetector for UniformGrid {
    fn detect(&mut self, query: &ContactQuery<'_>, out: &mut Vec<Contact>) {
        let cell = self.cell_size_for(query.radius);

        self.cells.clear();
        for &i in query.infectious {
            self.cells
                .entry(Self::key(query.positions[i.index()], cell))
                .or_default()
                .push(i);
        }

        for &s in query.susceptible {
            let (cx, cy) = Self::key(query.positions[s.index()], cell);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let Some(bucket) = self.cells.get(&(cx.wrapping_add(dx), cy.wrapping_add(dy))) else {
                        continue;
                    };
                    for &i in bucket {
                        if query.in_contact(s, i) {
                            out.push(Contact { susceptible: s, infected: i });
                        }
                    }
                }
            }
        }
    }
}
