//! This module holds the hexagon grid geometry: coordinates, rounding, the
//! projection between hex space and pixel space, and shape generation.
//!
//! ## Coordinate Systems
//!
//! ### Cube Coordinates
//!
//! Hex cells are addressed with the [cube coordinate system described by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components (`q`, `r`, and `s`), and **for every
//! cell all three components are integers and `q + r + s = 0`**. Using three
//! components for a two-dimensional grid makes distance, rotation, and
//! rounding dramatically simpler. Since `s` can always be derived from the
//! other two, [CubeCoord] only stores `q` and `r`.
//!
//! ### Fractional Coordinates
//!
//! Projecting a pixel back into hex space almost never lands exactly on a cell
//! center, so the inverse projection produces a [FractionalCoord]. These are
//! transient and must be [rounded](FractionalCoord::round) before they can
//! identify a cell.
//!
//! ### Offset Coordinates
//!
//! [OffsetCoord]s are the `(col, row)` encoding that shows up in rectangular
//! maps. Every other row (or column) is shoved over by half a cell, which is
//! why converting requires knowing the [OffsetParity].
//!
//! ### Pixel Space
//!
//! Pixel space is a plain 2D space with `+x` going right and `+y` going
//! **down**. A [Layout] defines the mapping between hex and pixel space: an
//! [Orientation] (pointy-top or flat-top), the pixel size of a cell, and the
//! pixel position of the origin cell.

mod coord;
mod layout;
mod offset;
mod shape;

pub use coord::{CubeCoord, FractionalCoord, RotationDirection};
pub use layout::{Layout, Orientation, OrientationKind};
pub use offset::{OffsetCoord, OffsetParity};
pub use shape::{
    hexagonal_len, hexagonal_shape, rectangular_shape, CubeCoordIndexMap,
    CubeCoordSet, OffsetCell,
};

pub(crate) use coord::CoordRecord;
