pub mod config;
#[cfg(feature = "svg")]
mod svg;

use crate::{render::config::RenderConfig, util::unit::Hsl, Tile};
#[cfg(feature = "svg")]
use crate::{timed, MapEditor};
use validator::Validate;

/// A map renderer converts an editor's current state into a visual output
/// format. A renderer is created using a particular [RenderConfig], and from
/// there can be used to render any number of maps any number of times.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new one.
///
/// ## Supported Formats
/// - SVG (requires the `svg` feature)
#[derive(Clone, Debug)]
pub struct MapRenderer {
    render_config: RenderConfig,
}

impl MapRenderer {
    /// Color used for grid outlines
    pub const GRID_COLOR: Hsl = Hsl::new(0, 0, 75);
    /// Color used for tile outlines
    pub const TILE_STROKE_COLOR: Hsl = Hsl::new(0, 0, 20);

    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config.validate()?;
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Compute the fill color of a tile. This is the tile's base color,
    /// shifted by its height according to the shading steps in the render
    /// config. A tile at height 0 is drawn in its base color.
    pub fn tile_color(&self, tile: &Tile) -> Hsl {
        let height = tile.height();
        let config = &self.render_config;
        tile.color().shifted(
            height.saturating_mul(config.hue_step),
            height.saturating_mul(config.saturation_step),
            height.saturating_mul(config.lightness_step),
        )
    }

    /// Render the editor's map as a 2D SVG. The document covers exactly the
    /// editor's viewport, so pixel positions in the SVG match pixel positions
    /// in the editor. Returns the SVG in a string.
    #[cfg(feature = "svg")]
    pub fn render_as_svg(&self, editor: &MapEditor) -> String {
        timed!("SVG rendering", log::Level::Info, {
            svg::map_to_svg(editor, self).to_string()
        })
    }
}
