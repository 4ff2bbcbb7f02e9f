use crate::util::range::NumRange;
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. This is the same space that a layout's size and
/// origin are defined in, as well as whatever pointer positions come in from
/// the outside world.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A color in HSL space. Hue is in degrees `[0, 360)`, saturation and
/// lightness are percentages `[0, 100]`. We never convert to or from RGB
/// here, these values get handed straight to the rendering sink.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(
    fmt = "hsl({}, {}%, {}%)",
    "self.hue",
    "self.saturation",
    "self.lightness"
)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// The valid range for saturation and lightness
    const PERCENT_RANGE: NumRange<i32> = NumRange::new(0, 100);

    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Shift each component of this color by some amount. Hue wraps around
    /// the color wheel, while saturation and lightness are clamped to
    /// `[0, 100]`.
    pub fn shifted(self, hue: i32, saturation: i32, lightness: i32) -> Self {
        let shift_percent = |value: u8, delta: i32| {
            Self::PERCENT_RANGE.clamp(i32::from(value).saturating_add(delta))
                as u8
        };
        Self {
            hue: (i32::from(self.hue) + hue.rem_euclid(360)).rem_euclid(360)
                as u16,
            saturation: shift_percent(self.saturation, saturation),
            lightness: shift_percent(self.lightness, lightness),
        }
    }

    /// Convert this color to a CSS color string: `hsl(h, s%, l%)`
    pub fn to_css(self) -> String {
        self.to_string()
    }
}
