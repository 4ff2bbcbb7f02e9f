use crate::hex::{CubeCoord, OffsetCoord};
use fnv::FnvBuildHasher;
use indexmap::{IndexMap, IndexSet};
use std::{cmp, ops::RangeInclusive};

/// An ORDERED set of cube coordinates. Iteration order is insertion order.
pub type CubeCoordSet = IndexSet<CubeCoord, FnvBuildHasher>;
/// An ORDERED map of cube coordinates to some `T`
pub type CubeCoordIndexMap<T> = IndexMap<CubeCoord, T, FnvBuildHasher>;

/// Calculate the number of cells in a hexagon of the given radius. Radius 0
/// means 1 cell, 1 is 7 cells, 2 is 19, etc.
pub fn hexagonal_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Get every cell within `radius` steps of the origin, which together form
/// a big hexagon. Ordered by ascending q, then ascending r.
pub fn hexagonal_shape(radius: u32) -> CubeCoordSet {
    let capacity = hexagonal_len(radius);
    let mut cells =
        CubeCoordSet::with_capacity_and_hasher(capacity, FnvBuildHasher::default());

    let n = radius as i32;
    for q in -n..=n {
        // If we just do [-n,n] for r as well, then we end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let r_min = cmp::max(-n, -q - n);
        let r_max = cmp::min(n, -q + n);
        for r in r_min..=r_max {
            cells.insert(CubeCoord::new_qr(q, r));
        }
    }
    debug_assert_eq!(cells.len(), capacity, "expected 3r²+3r+1 cells");

    cells
}

/// A cell from a rectangular shape, which remembers the offset coordinate it
/// was generated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OffsetCell {
    pub hex: CubeCoord,
    pub offset: OffsetCoord,
}

/// Get every cell in a rectangle of offset coordinates. The conversion from
/// offset to cube coordinates is up to the caller, since it depends on which
/// offset flavor the rectangle is laid out in. Typically this is one of
/// [OffsetCoord::to_cube_q] or [OffsetCoord::to_cube_r].
///
/// Cells are ordered column-major: ascending column, then ascending row within
/// each column.
pub fn rectangular_shape(
    cols: RangeInclusive<i32>,
    rows: RangeInclusive<i32>,
    offset_to_cube: impl Fn(OffsetCoord) -> CubeCoord,
) -> Vec<OffsetCell> {
    cols.flat_map(|col| {
        rows.clone().map(move |row| OffsetCoord::new(col, row))
    })
    .map(|offset| OffsetCell {
        hex: offset_to_cube(offset),
        offset,
    })
    .collect()
}
