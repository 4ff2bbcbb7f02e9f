use crate::hex::CubeCoord;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A `(col, row)` coordinate in an offset grid, where every other column (or
/// row) is shoved over by half a cell. Offset coordinates are handy for
/// rectangular maps, but they're awful for math, so convert them to
/// [CubeCoord]s as soon as possible.
///
/// There are four flavors of offset grid, depending on which axis gets shoved
/// (q-offset shoves columns, r-offset shoves rows) and whether the even or odd
/// lines are the shoved ones (see [OffsetParity]). q-offset goes with
/// flat-topped layouts, r-offset goes with pointy-topped layouts.
///
/// https://www.redblobgames.com/grids/hexagons/#coordinates-offset
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

/// Whether the even or odd lines of an offset grid are shoved over
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum OffsetParity {
    Even,
    Odd,
}

impl OffsetParity {
    fn sign(self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert a cube coordinate into a q-offset (shoved columns) coordinate
    pub fn from_cube_q(hex: CubeCoord, parity: OffsetParity) -> Self {
        let (q, r) = (hex.q(), hex.r());
        // `& 1` is 0/1 for negative numbers too, unlike `% 2`
        Self::new(q, r + (q + parity.sign() * (q & 1)) / 2)
    }

    /// Convert this q-offset (shoved columns) coordinate to cube coordinates
    pub fn to_cube_q(self, parity: OffsetParity) -> CubeCoord {
        let q = self.col;
        let r = self.row - (self.col + parity.sign() * (self.col & 1)) / 2;
        CubeCoord::new_qr(q, r)
    }

    /// Convert a cube coordinate into an r-offset (shoved rows) coordinate
    pub fn from_cube_r(hex: CubeCoord, parity: OffsetParity) -> Self {
        let (q, r) = (hex.q(), hex.r());
        Self::new(q + (r + parity.sign() * (r & 1)) / 2, r)
    }

    /// Convert this r-offset (shoved rows) coordinate to cube coordinates
    pub fn to_cube_r(self, parity: OffsetParity) -> CubeCoord {
        let q = self.col - (self.row + parity.sign() * (self.row & 1)) / 2;
        let r = self.row;
        CubeCoord::new_qr(q, r)
    }
}
