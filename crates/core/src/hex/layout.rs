use crate::{
    hex::{CubeCoord, FractionalCoord},
    util::unit::Point2,
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{Display, EnumIter, EnumString};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The basis for projecting between hex space and pixel space. An orientation
/// is a pair of 2x2 matrices (one forward, one inverse) plus the angle of the
/// first corner, in sixths of a turn. In practice you want one of the two
/// standard ones, [Self::pointy] or [Self::flat], but any basis will work
/// as long as the two matrices are inverses of each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    /// Maps axial `(q, r)` to pixels (before scaling by size)
    forward: Matrix2<f64>,
    /// Maps unscaled pixels back to axial `(q, r)`
    inverse: Matrix2<f64>,
    /// Angle of corner 0, as a fraction of 60°. 0.5 means corner 0 is at 30°.
    start_angle: f64,
}

impl Orientation {
    /// Build an orientation from raw constants. Both matrices are given in
    /// row-major order: `[f0, f1, f2, f3]` maps to `x = f0*q + f1*r`,
    /// `y = f2*q + f3*r`.
    pub fn new(forward: [f64; 4], inverse: [f64; 4], start_angle: f64) -> Self {
        let [f0, f1, f2, f3] = forward;
        let [b0, b1, b2, b3] = inverse;
        Self {
            forward: Matrix2::new(f0, f1, f2, f3),
            inverse: Matrix2::new(b0, b1, b2, b3),
            start_angle,
        }
    }

    /// Pointy-topped cells: rows of cells line up horizontally, and each cell
    /// has a vertex pointing straight up.
    pub fn pointy() -> Self {
        Self::new(
            [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
            [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            0.5,
        )
    }

    /// Flat-topped cells: columns of cells line up vertically, and each cell
    /// has a flat side on top.
    pub fn flat() -> Self {
        Self::new(
            [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
            [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
            0.0,
        )
    }

    pub fn forward(&self) -> &Matrix2<f64> {
        &self.forward
    }

    pub fn inverse(&self) -> &Matrix2<f64> {
        &self.inverse
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}

/// The two standard orientations, as a plain enum so they can be named in
/// config.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    Pointy,
    Flat,
}

impl Default for OrientationKind {
    fn default() -> Self {
        Self::Flat
    }
}

impl From<OrientationKind> for Orientation {
    fn from(kind: OrientationKind) -> Self {
        match kind {
            OrientationKind::Pointy => Self::pointy(),
            OrientationKind::Flat => Self::flat(),
        }
    }
}

/// The complete mapping between hex space and pixel space. A layout is an
/// [Orientation], plus the size of a cell (in pixels, x and y can differ to
/// squash the grid) and the pixel location of the center of the origin cell.
///
/// Layouts are cheap to copy. They're meant to be built once and only rebuilt
/// when the grid is explicitly reconfigured, e.g. when the viewport changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    size: Point2,
    origin: Point2,
}

impl Layout {
    pub fn new(orientation: Orientation, size: Point2, origin: Point2) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> Point2 {
        self.size
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Copy this layout with a new origin
    pub fn with_origin(self, origin: Point2) -> Self {
        Self { origin, ..self }
    }

    /// Get the pixel position of the center of a cell
    pub fn hex_to_pixel(&self, hex: CubeCoord) -> Point2 {
        let axial = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let unscaled = self.orientation.forward * axial;
        Point2::new(
            unscaled.x * self.size.x + self.origin.x,
            unscaled.y * self.size.y + self.origin.y,
        )
    }

    /// Project a pixel back into hex space. The output will almost never be
    /// a cell center, so it needs to be [rounded](FractionalCoord::round)
    /// before it can be used to look up a cell. [Self::hex_at] does both.
    pub fn pixel_to_hex(&self, point: Point2) -> FractionalCoord {
        let unscaled = Vector2::new(
            (point.x - self.origin.x) / self.size.x,
            (point.y - self.origin.y) / self.size.y,
        );
        let axial = self.orientation.inverse * unscaled;
        FractionalCoord::new_qr(axial.x, axial.y)
    }

    /// Get the cell that contains a pixel
    pub fn hex_at(&self, point: Point2) -> CubeCoord {
        self.pixel_to_hex(point).round()
    }

    /// Get the offset from a cell's center to one of its corners. Corners are
    /// numbered 0-5, going in the direction of increasing angle (which is
    /// clockwise on screen, since y points down).
    pub fn corner_offset(&self, corner: usize) -> Point2 {
        let angle = 2.0 * PI * (self.orientation.start_angle + corner as f64) / 6.0;
        Point2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the 6 corners of a cell in pixel space, in corner order. Drawing
    /// these in order (and closing back to the first) traces the cell outline.
    pub fn polygon_corners(&self, hex: CubeCoord) -> [Point2; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|corner| center + self.corner_offset(corner))
    }
}
