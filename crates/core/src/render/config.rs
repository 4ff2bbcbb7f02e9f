use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration specific to visually rendering a map. These options have
/// absolutely no bearing on the map data itself, only on its visual
/// presentation. Saving a map to JSON or binary will **never** be affected by
/// these options.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_render_config"))]
pub struct RenderConfig {
    /// Should the outline of every grid cell be drawn under the tiles?
    pub show_grid: bool,

    /// Width of the lines used for grid and tile outlines, in pixels. Zero
    /// disables outlines on tiles.
    #[validate(range(min = 0.0))]
    pub stroke_width: f64,

    /// Each tile's color gets shifted according to its height, so that taller
    /// tiles stand out. These are the amounts each HSL component is shifted
    /// **per level** of height. Negative heights shift the other way.
    ///
    /// Hue is in degrees and wraps around the color wheel. Saturation and
    /// lightness are percentage points, clamped to `[0, 100]`.
    pub hue_step: i32,
    pub saturation_step: i32,
    pub lightness_step: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            stroke_width: 1.0,
            hue_step: 5,
            saturation_step: 10,
            lightness_step: 10,
        }
    }
}

fn validate_render_config(
    render_config: &RenderConfig,
) -> Result<(), ValidationError> {
    if render_config.stroke_width.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("stroke_width_not_finite"))
    }
}
