use crate::{
    hex::{Layout, OrientationKind},
    util::{range::NumRange, unit::Point2},
    Tile, TileType,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines the grid a map is edited on, and the rules for
/// the tiles painted onto it. Changing any of these values after a map has
/// been painted is allowed, but tiles that are already placed are only
/// brought into line with the new height range when the map is next loaded.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_map_config"))]
pub struct MapConfig {
    /// Which way the cells face: `pointy` (a vertex points up) or `flat`
    /// (a side faces up)
    pub orientation: OrientationKind,

    /// Horizontal size of a cell, in pixels. This is the distance from the
    /// center of a cell to a corner, along the x axis.
    #[validate(range(min = 1.0))]
    pub hex_width: f64,

    /// Vertical size of a cell, in pixels. When this differs from
    /// `hex_width` the whole grid gets squashed, which is handy for a faux
    /// isometric look.
    #[validate(range(min = 1.0))]
    pub hex_height: f64,

    /// Lowest height a tile can be lowered to. Must be at most -1, so that
    /// freshly retyped tiles land in range.
    pub min_height: i32,

    /// Highest height a tile can be raised to
    pub max_height: i32,

    /// The tile type that's active when the editor starts up
    pub tile_type: TileType,
}

impl MapConfig {
    /// Size of a single cell, in pixels
    pub fn hex_size(&self) -> Point2 {
        Point2::new(self.hex_width, self.hex_height)
    }

    /// Range of allowed tile heights, inclusive on both ends
    pub fn heights(&self) -> NumRange<i32> {
        NumRange::new(self.min_height, self.max_height)
    }

    /// Build a grid layout from this config, centered on the given pixel
    pub fn layout(&self, origin: Point2) -> Layout {
        Layout::new(self.orientation.into(), self.hex_size(), origin)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Flat,
            hex_width: 28.0,
            hex_height: 12.0,
            min_height: -3,
            max_height: 3,
            tile_type: TileType::Grass,
        }
    }
}

fn validate_map_config(config: &MapConfig) -> Result<(), ValidationError> {
    // Range checks let NaN through
    if !(config.hex_width.is_finite() && config.hex_height.is_finite()) {
        return Err(ValidationError::new("hex_size_not_finite"));
    }
    if config.min_height > config.max_height {
        return Err(ValidationError::new("min_height_above_max_height"));
    }
    if config.min_height > Tile::RETYPED_HEIGHT {
        return Err(ValidationError::new("min_height_above_retyped_height"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeCoord;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_default_is_valid() {
        MapConfig::default().validate().unwrap();
    }

    #[test]
    fn test_layout() {
        let config = MapConfig {
            orientation: OrientationKind::Pointy,
            hex_width: 10.0,
            hex_height: 10.0,
            ..Default::default()
        };
        let layout = config.layout(Point2::new(50.0, 50.0));
        let pixel = layout.hex_to_pixel(CubeCoord::new_qr(0, 1));
        assert_approx_eq!(pixel.x, 50.0 + 5.0 * 3f64.sqrt());
        assert_approx_eq!(pixel.y, 65.0);
        assert_eq!(config.heights(), NumRange::new(-3, 3));
    }

    #[test]
    fn test_non_finite_hex_size() {
        for (width, height) in &[
            (f64::NAN, 12.0),
            (28.0, f64::NAN),
            (f64::INFINITY, 12.0),
        ] {
            let config = MapConfig {
                hex_width: *width,
                hex_height: *height,
                ..Default::default()
            };
            let errors = config.validate().unwrap_err();
            let errors = errors.errors();
            assert!(errors.contains_key("__all__"), "{:?}", errors);
        }
    }

    #[test]
    fn test_deserialize_partial() {
        let config: MapConfig =
            serde_json::from_str(r#"{"orientation": "pointy", "max_height": 5}"#)
                .unwrap();
        assert_eq!(config.orientation, OrientationKind::Pointy);
        assert_eq!(config.max_height, 5);
        assert_eq!(config.min_height, -3);
        assert_eq!(config.tile_type, TileType::Grass);
    }
}
