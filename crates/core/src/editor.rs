use crate::{
    config::MapConfig,
    error::HexError,
    hex::{hexagonal_shape, CubeCoord, Layout, RotationDirection},
    map::{Tile, TileMap, TileType},
    util::unit::Point2,
};
use anyhow::Context;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// The pixel dimensions of the surface the map is drawn onto
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_viewport"))]
pub struct Viewport {
    #[validate(range(min = 1.0))]
    pub width: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The pixel at the center of the viewport. The origin cell is drawn
    /// here.
    pub fn center(&self) -> Point2 {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

fn validate_viewport(viewport: &Viewport) -> Result<(), ValidationError> {
    if viewport.width.is_finite() && viewport.height.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("viewport_not_finite"))
    }
}

/// Everything needed to draw the hover state for a single cell
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    /// The cell under the cursor
    pub hex: CubeCoord,
    /// Outline of the hovered cell, in corner order
    pub corners: [Point2; 6],
    /// Height info for the tile under the cursor. `None` if the cell is empty.
    pub indicator: Option<HeightIndicator>,
}

/// A vertical gauge showing where a tile's height sits within the allowed
/// range. Levels are 1-based: the lowest allowed height is level 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeightIndicator {
    /// Total number of levels in the gauge
    pub levels: u32,
    /// The level the tile is at, in `[1, levels]`
    pub level: u32,
}

/// A single cell of the background grid
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridCell {
    pub hex: CubeCoord,
    pub corners: [Point2; 6],
}

/// The editor ties together all of the map state: the grid layout, the tiles,
/// and the tile type the user is currently painting with. All user gestures
/// come in as pixel positions, and the editor is responsible for projecting
/// them into the grid and applying them to the map.
///
/// The layout is only rebuilt when the viewport changes (see [Self::resize]),
/// never per gesture.
#[derive(Clone, Debug)]
pub struct MapEditor {
    config: MapConfig,
    viewport: Viewport,
    layout: Layout,
    grid_radius: u32,
    tiles: TileMap,
    tile_type: TileType,
}

impl MapEditor {
    /// Create a new editor with an empty map. Returns an error if either the
    /// config or the viewport is invalid.
    pub fn new(config: MapConfig, viewport: Viewport) -> anyhow::Result<Self> {
        config.validate().context("invalid map config")?;
        viewport.validate().context("invalid viewport")?;

        let layout = config.layout(viewport.center());
        let grid_radius = Self::calc_grid_radius(&layout, viewport);
        info!(
            "Initialized {} editor with {} cell radius, viewport {}x{}",
            config.orientation, grid_radius, viewport.width, viewport.height
        );

        Ok(Self {
            viewport,
            layout,
            grid_radius,
            tiles: TileMap::new(config.heights()),
            tile_type: config.tile_type,
            config,
        })
    }

    /// How many cells out from the origin the grid needs to reach in order
    /// to cover the whole viewport
    fn calc_grid_radius(layout: &Layout, viewport: Viewport) -> u32 {
        let size = layout.size();
        let radius = f64::max(
            viewport.width / size.x / 2.0,
            viewport.height / size.y / 2.0,
        );
        radius.ceil() as u32
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid_radius(&self) -> u32 {
        self.grid_radius
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    /// Mutable access to the tile map, for callers that want to adjust
    /// heights directly (e.g. after resolving a press-and-hold gesture)
    pub fn tiles_mut(&mut self) -> &mut TileMap {
        &mut self.tiles
    }

    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    /// Change the tile type that future paints will use. Tiles that are
    /// already painted keep their color until they're painted over.
    pub fn set_tile_type(&mut self, tile_type: TileType) {
        debug!("Active tile type {} -> {}", self.tile_type, tile_type);
        self.tile_type = tile_type;
    }

    /// Adapt to a new viewport size. The origin moves to the new center and
    /// the grid grows or shrinks to cover it. Tiles don't move in hex space.
    pub fn resize(&mut self, viewport: Viewport) -> anyhow::Result<()> {
        viewport.validate().context("invalid viewport")?;
        self.layout = self.layout.with_origin(viewport.center());
        self.grid_radius = Self::calc_grid_radius(&self.layout, viewport);
        self.viewport = viewport;
        debug!(
            "Resized to {}x{}, grid radius {}",
            viewport.width, viewport.height, self.grid_radius
        );
        Ok(())
    }

    /// Paint the cell under a pixel with the active tile type. On an
    /// existing tile this raises it one level, or lowers it if `lower` is
    /// set. See [TileMap::upsert] for the full rules.
    pub fn paint(&mut self, pixel: Point2, lower: bool) -> &Tile {
        let delta = if lower { -1 } else { 1 };
        self.tiles
            .upsert(&self.layout, pixel, delta, self.tile_type.color())
    }

    /// Erase the tile under a pixel, if any
    pub fn erase(&mut self, pixel: Point2) -> Option<Tile> {
        self.tiles.remove(&self.layout, pixel)
    }

    /// Rotate every tile 60° around the origin cell
    pub fn rotate(
        &mut self,
        direction: Option<RotationDirection>,
    ) -> Result<(), HexError> {
        self.tiles.rotate(direction)
    }

    /// Remove every tile from the map
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Figure out what to highlight for a cursor at the given pixel
    pub fn hover(&self, pixel: Point2) -> Hover {
        let hex = self.layout.hex_at(pixel);
        let heights = self.tiles.heights();
        let indicator = self.tiles.get(hex).map(|tile| HeightIndicator {
            levels: heights.len(),
            level: heights.level_of(tile.height()),
        });
        trace!("Hover {} -> {} {:?}", pixel, hex, indicator);

        Hover {
            hex,
            corners: self.layout.polygon_corners(hex),
            indicator,
        }
    }

    /// Get every cell of the background grid, which is a big hexagon
    /// centered on the origin that covers the viewport
    pub fn grid_cells(&self) -> impl Iterator<Item = GridCell> {
        let layout = self.layout;
        hexagonal_shape(self.grid_radius)
            .into_iter()
            .map(move |hex| GridCell {
                hex,
                corners: layout.polygon_corners(hex),
            })
    }

    /// Replace the current map with one loaded from JSON. Tile heights are
    /// clamped to this editor's height range. On error, the current map is
    /// left as is.
    pub fn load_json(&mut self, json: &str) -> Result<(), HexError> {
        self.tiles = TileMap::from_json(json, self.config.heights())?;
        Ok(())
    }

    /// Serialize the current map to JSON
    pub fn save_json(&self) -> String {
        self.tiles.to_json()
    }

    /// Replace the current map with one loaded from the binary format. See
    /// [Self::load_json].
    #[cfg(feature = "bin")]
    pub fn load_bin(&mut self, read: impl std::io::Read) -> Result<(), HexError> {
        self.tiles = TileMap::from_bin(read, self.config.heights())?;
        Ok(())
    }

    /// Serialize the current map to the binary format
    #[cfg(feature = "bin")]
    pub fn save_bin(&self) -> Vec<u8> {
        self.tiles.to_bin()
    }
}
