//! Hexmap is the core of a hex tile map editor. It contains all of the grid
//! geometry (cube coordinates, rounding, and the projection between pixels and
//! cells) plus the tile map that user gestures are applied to. Presentation
//! layers are implemented elsewhere; this crate only hands them pixel
//! polygons and colors.
//!
//! ```
//! use hexmap::{MapConfig, MapEditor, Point2, RotationDirection, Viewport};
//!
//! let mut editor =
//!     MapEditor::new(MapConfig::default(), Viewport::new(1280.0, 720.0))
//!         .unwrap();
//! // Paint the cell at the center of the screen, then raise it
//! let center = Point2::new(640.0, 360.0);
//! editor.paint(center, false);
//! editor.paint(center, false);
//! assert_eq!(editor.tiles().tile_height_at(editor.layout(), center), Some(1));
//!
//! editor.rotate(Some(RotationDirection::Left)).unwrap();
//! let json = editor.save_json();
//! // From here you can display/persist the map however you like.
//! ```
//!
//! See [MapConfig] for details on how the grid can be customized, and the
//! [hex] module for an explanation of the coordinate systems.

mod config;
mod editor;
mod error;
pub mod hex;
mod map;
mod render;
mod util;

pub use crate::{
    config::MapConfig,
    editor::{GridCell, HeightIndicator, Hover, MapEditor, Viewport},
    error::HexError,
    hex::{
        CubeCoord, FractionalCoord, Layout, Orientation, OrientationKind,
        RotationDirection,
    },
    map::{Tile, TileMap, TileType},
    render::{config::RenderConfig, MapRenderer},
    util::{
        range::NumRange,
        unit::{Hsl, Point2},
    },
};
