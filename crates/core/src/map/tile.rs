use crate::{
    error::HexError,
    hex::{CoordRecord, CubeCoord},
    util::unit::Hsl,
};
use serde::{Deserialize, Serialize};
use std::convert::{TryFrom, TryInto};
use strum::{Display, EnumIter, EnumString};

/// A map is made up of tiles. Each tile occupies exactly one hex cell, and a
/// cell can hold at most one tile (tiles **cannot** be stacked). Tiles are
/// painted onto the map by the user, and each one has a color (determined by
/// the [TileType] it was painted with) and a height.
///
/// Tiles are owned by a [TileMap](crate::TileMap), which is the only thing
/// that can create or modify them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tile {
    /// The cell this tile occupies. Unique within its map.
    pub(super) location: CubeCoord,

    /// Base color of the tile, before any height shading is applied
    pub(super) color: Hsl,

    /// Height of the tile, always within the map's height range
    pub(super) height: i32,
}

impl Tile {
    /// Height given to a tile the first time it's painted
    pub const INITIAL_HEIGHT: i32 = 0;

    /// Height a tile is knocked back to when it's painted over with a
    /// different tile type. The height delta of that same paint is applied on
    /// top, so repainting with a raise lands at 0.
    pub const RETYPED_HEIGHT: i32 = -1;

    pub(super) fn new(location: CubeCoord, color: Hsl) -> Self {
        Self {
            location,
            color,
            height: Self::INITIAL_HEIGHT,
        }
    }

    pub fn location(&self) -> CubeCoord {
        self.location
    }

    pub fn color(&self) -> Hsl {
        self.color
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// The raw persisted form of a [Tile]. Loaded maps go through this so that
/// every location gets validated before it's allowed anywhere near the
/// geometry code.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TileRecord {
    location: CoordRecord,
    color: Hsl,
    height: i32,
}

impl TryFrom<TileRecord> for Tile {
    type Error = HexError;

    fn try_from(record: TileRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            location: record.location.try_into()?,
            color: record.color,
            height: record.height,
        })
    }
}

/// The different kinds of tile a user can paint. The type only determines the
/// tile's base color; once painted, a tile just remembers the color.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileType {
    Grass,
    Water,
    Sand,
    Stone,
    Snow,
}

impl TileType {
    /// Map a tile type to its preset color
    pub fn color(self) -> Hsl {
        match self {
            Self::Grass => Hsl::new(95, 40, 45),
            Self::Water => Hsl::new(205, 65, 45),
            Self::Sand => Hsl::new(45, 55, 65),
            Self::Stone => Hsl::new(30, 8, 50),
            Self::Snow => Hsl::new(200, 20, 88),
        }
    }
}

impl Default for TileType {
    fn default() -> Self {
        Self::Grass
    }
}
