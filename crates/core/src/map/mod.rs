//! The tile map is the state that the editor actually edits. It's a
//! collection of [Tile]s, at most one per cell, kept in the order they were
//! first painted.
//!
//! ## Serialization
//! Maps can be saved and reloaded in two formats: JSON and binary. Both
//! formats hold a flat sequence of tiles, in paint order:
//!
//! ```json
//! [{"location": {"q": 1, "r": -1, "s": 0}, "color": {"hue": 95, "saturation": 40, "lightness": 45}, "height": 2}]
//! ```
//!
//! The binary format is [CBOR](https://cbor.io/) with the same structure. When
//! loading, every location is validated before the map is built, so a map in
//! memory never holds a malformed coordinate. See [TileMap::from_json].

mod tile;

pub use tile::{Tile, TileType};

use crate::{
    error::HexError,
    hex::{CubeCoord, CubeCoordIndexMap, Layout, RotationDirection},
    map::tile::TileRecord,
    timed,
    util::{
        range::NumRange,
        unit::{Hsl, Point2},
    },
};
use indexmap::map::Entry;
use log::{debug, info, trace};
use std::{convert::TryFrom, mem};

/// A collection of tiles, keyed by location. Every tile's height is kept
/// within the map's height range at all times; operations that would push a
/// tile outside the range get clamped instead of failing.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    tiles: CubeCoordIndexMap<Tile>,
    heights: NumRange<i32>,
}

impl TileMap {
    /// Height range used when no other range is given
    pub const DEFAULT_HEIGHTS: NumRange<i32> = NumRange::new(-3, 3);

    /// Create an empty map whose tiles must stay within the given heights
    pub fn new(heights: NumRange<i32>) -> Self {
        Self {
            tiles: CubeCoordIndexMap::default(),
            heights,
        }
    }

    /// The allowed range of tile heights, inclusive on both ends
    pub fn heights(&self) -> NumRange<i32> {
        self.heights
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles, in paint order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Get the tile at a location, if there is one
    pub fn get(&self, location: CubeCoord) -> Option<&Tile> {
        self.tiles.get(&location)
    }

    /// Get a tile by its paint-order index, e.g. one returned by
    /// [Self::locate]
    pub fn get_index(&self, index: usize) -> Option<&Tile> {
        self.tiles.get_index(index).map(|(_, tile)| tile)
    }

    /// Find the tile under a pixel. Returns the tile's paint-order index, or
    /// `None` if the cell under the pixel is empty.
    pub fn locate(&self, layout: &Layout, pixel: Point2) -> Option<usize> {
        let location = layout.hex_at(pixel);
        let index = self.tiles.get_full(&location).map(|(index, _, _)| index);
        trace!("Locate {} -> {} -> {:?}", pixel, location, index);
        index
    }

    /// Get the height of the tile under a pixel, if there is one
    pub fn tile_height_at(&self, layout: &Layout, pixel: Point2) -> Option<i32> {
        self.get(layout.hex_at(pixel)).map(Tile::height)
    }

    /// Paint the cell under a pixel.
    ///
    /// If the cell is empty, a new tile is created there with the given color
    /// at [Tile::INITIAL_HEIGHT]. The height delta is **not** applied to new
    /// tiles.
    ///
    /// If there's already a tile there, its height is shifted by
    /// `height_delta`, clamped to the map's height range. If the tile has a
    /// different color than the one given, it takes on the new color and its
    /// height is reset to [Tile::RETYPED_HEIGHT] before the delta is applied.
    ///
    /// Returns the new state of the painted tile.
    pub fn upsert(
        &mut self,
        layout: &Layout,
        pixel: Point2,
        height_delta: i32,
        color: Hsl,
    ) -> &Tile {
        let location = layout.hex_at(pixel);
        let heights = self.heights;
        match self.tiles.entry(location) {
            Entry::Vacant(entry) => {
                debug!("Inserting tile at {}", location);
                entry.insert(Tile::new(location, color))
            }
            Entry::Occupied(entry) => {
                let tile = entry.into_mut();
                if tile.color != color {
                    debug!(
                        "Retyping tile at {} from {} to {}",
                        location, tile.color, color
                    );
                    tile.color = color;
                    tile.height = Tile::RETYPED_HEIGHT;
                }
                tile.height =
                    heights.clamp(tile.height.saturating_add(height_delta));
                debug!("Tile at {} now at height {}", location, tile.height);
                tile
            }
        }
    }

    /// Set the height of the tile at a location directly, clamped to the
    /// map's height range. Returns the updated tile, or `None` if there is no
    /// tile there.
    pub fn set_tile_height(
        &mut self,
        location: CubeCoord,
        height: i32,
    ) -> Option<&Tile> {
        let heights = self.heights;
        let tile = self.tiles.get_mut(&location)?;
        tile.height = heights.clamp(height);
        debug!("Set height of tile at {} to {}", location, tile.height);
        Some(tile)
    }

    /// Remove the tile under a pixel. Returns the removed tile, or `None` if
    /// the cell was already empty. Order of the remaining tiles is preserved.
    pub fn remove(&mut self, layout: &Layout, pixel: Point2) -> Option<Tile> {
        let location = layout.hex_at(pixel);
        let removed = self.tiles.shift_remove(&location);
        if removed.is_some() {
            debug!("Removed tile at {}", location);
        }
        removed
    }

    /// Rotate the whole map 60° around the origin cell. Every tile keeps its
    /// color, height and place in the paint order; only locations change.
    ///
    /// A direction is required. If it's missing, this fails with
    /// [HexError::InvalidDirection] and the map is left untouched.
    pub fn rotate(
        &mut self,
        direction: Option<RotationDirection>,
    ) -> Result<(), HexError> {
        let direction =
            direction.ok_or(HexError::InvalidDirection { given: None })?;

        // Rotation is a bijection on cells, so no two tiles can collide
        self.tiles = mem::take(&mut self.tiles)
            .into_iter()
            .map(|(location, mut tile)| {
                let rotated = location.rotate(direction);
                tile.location = rotated;
                (rotated, tile)
            })
            .collect();
        debug!("Rotated {} tiles {}", self.tiles.len(), direction);
        Ok(())
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        debug!("Clearing {} tiles", self.tiles.len());
        self.tiles.clear();
    }

    /// Build a map from raw records. Rejects the whole batch if any location
    /// is malformed or duplicated. Heights are clamped into range.
    fn from_records(
        records: Vec<TileRecord>,
        heights: NumRange<i32>,
    ) -> Result<Self, HexError> {
        let mut map = Self::new(heights);
        map.tiles.reserve(records.len());
        for record in records {
            let mut tile = Tile::try_from(record)?;
            if !heights.contains(tile.height) {
                debug!(
                    "Clamping height {} of tile at {} into {}",
                    tile.height, tile.location, heights
                );
                tile.height = heights.clamp(tile.height);
            }
            match map.tiles.entry(tile.location) {
                Entry::Vacant(entry) => {
                    entry.insert(tile);
                }
                Entry::Occupied(entry) => {
                    return Err(HexError::DuplicateTile(*entry.key()));
                }
            }
        }
        info!("Loaded {} tiles", map.tiles.len());
        Ok(map)
    }

    /// Get all tiles as a sequence, which is the persisted form of the map
    fn to_records(&self) -> Vec<&Tile> {
        self.tiles.values().collect()
    }

    /// Deserialize a map from JSON. A map can be serialized into JSON with
    /// [Self::to_json]. Fails if the input is malformed, if any location isn't
    /// a valid cube coordinate, or if two tiles share a location. Heights
    /// outside the given range are clamped.
    pub fn from_json(
        json: &str,
        heights: NumRange<i32>,
    ) -> Result<Self, HexError> {
        timed!("Loading JSON map", {
            let records: Vec<TileRecord> = serde_json::from_str(json)?;
            Self::from_records(records, heights)
        })
    }

    /// Serialize this map into JSON. This is a recoverable format, which can
    /// be loaded back with [Self::from_json].
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(&self.to_records())
            .expect("error serializing map")
    }

    /// Deserialize a map from the binary format written by [Self::to_bin].
    /// Validation is the same as [Self::from_json].
    #[cfg(feature = "bin")]
    pub fn from_bin(
        read: impl std::io::Read,
        heights: NumRange<i32>,
    ) -> Result<Self, HexError> {
        timed!("Loading binary map", {
            let records: Vec<TileRecord> = serde_cbor::from_reader(read)?;
            Self::from_records(records, heights)
        })
    }

    /// Serialize this map into a binary format. See the module-level
    /// documentation for a description of the format.
    #[cfg(feature = "bin")]
    pub fn to_bin(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        // Panic here indicates an internal bug in the data format
        serde_cbor::to_writer(&mut buffer, &self.to_records())
            .expect("error serializing map");
        buffer
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHTS)
    }
}
