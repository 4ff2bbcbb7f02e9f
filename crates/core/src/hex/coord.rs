use crate::error::HexError;
use derive_more::{
    Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};
use strum::EnumIter;

/// How far a real-valued component can drift from an integer (and how far
/// `q + r + s` can drift from zero) before we consider a coordinate malformed.
const COORD_TOLERANCE: f64 = 1e-6;

/// Largest magnitude a component can have. `i32::MIN` is excluded so that
/// every component can be negated.
const MAX_COMPONENT: i32 = i32::MAX;

/// A single cell in the hex grid, in cube coordinates. See the module-level
/// docs for a description of the coordinate system.
///
/// Only `q` and `r` are stored; `s` is always derived as `-q - r`, which means
/// a `CubeCoord` can't violate `q + r + s = 0` by construction. Every
/// arithmetic operation on it (add, subtract, negate, scale) is linear, so the
/// invariant carries through those for free.
///
/// ## Serialization
///
/// Serializes as `{"q": _, "r": _, "s": _}`. Deserialization accepts real
/// numbers (some writers only have floats) but will reject anything that
/// isn't an integer point on the plane, rather than trying to fix it.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
#[serde(into = "CoordTriple", try_from = "CoordRecord")]
pub struct CubeCoord {
    q: i32,
    r: i32,
}

impl CubeCoord {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a new coordinate from all three components. Returns an error
    /// if they don't satisfy `q + r + s = 0`, or if any of them is
    /// `i32::MIN`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        let in_bounds = [q, r, s].iter().all(|v| *v >= -MAX_COMPONENT);
        let sum = i64::from(q) + i64::from(r) + i64::from(s);
        if in_bounds && sum == 0 {
            Ok(Self::new_qr(q, r))
        } else {
            Err(HexError::MalformedCoordinate {
                q: q.into(),
                r: r.into(),
                s: s.into(),
            })
        }
    }

    /// Construct a new coordinate from q and r (AKA axial coordinates). Since
    /// `q + r + s = 0`, we can derive s.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(self) -> i32 {
        self.q
    }

    pub fn r(self) -> i32 {
        self.r
    }

    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Multiply each component by a constant. Same as `self * factor`.
    pub fn scale(self, factor: i32) -> Self {
        self * factor
    }

    /// Distance from the origin, in cells. Each step between adjacent cells
    /// changes two components by one each, hence the halving. For a valid
    /// coordinate the sum is always even, so this is exact.
    pub fn length(self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        (self.q.unsigned_abs() + self.r.unsigned_abs() + self.s().unsigned_abs())
            / 2
    }

    /// Number of steps between two cells. 0 if they're the same, 1 if they're
    /// adjacent, etc.
    pub fn distance_to(self, other: CubeCoord) -> u32 {
        (self - other).length()
    }

    /// Rotate 60° counterclockwise about the origin:
    /// `(q, r, s) -> (-s, -q, -r)`
    pub fn rotate_left(self) -> Self {
        Self::new_qr(-self.s(), -self.q)
    }

    /// Rotate 60° clockwise about the origin: `(q, r, s) -> (-r, -s, -q)`.
    /// This is the inverse of [Self::rotate_left].
    pub fn rotate_right(self) -> Self {
        Self::new_qr(-self.r, -self.s())
    }

    /// Rotate 60° about the origin in the given direction
    pub fn rotate(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Left => self.rotate_left(),
            RotationDirection::Right => self.rotate_right(),
        }
    }
}

impl TryFrom<CoordRecord> for CubeCoord {
    type Error = HexError;

    fn try_from(record: CoordRecord) -> Result<Self, Self::Error> {
        let CoordRecord { q, r, s } = record;
        let is_valid_component = |v: f64| {
            (v - v.round()).abs() <= COORD_TOLERANCE
                && v.round().abs() <= f64::from(MAX_COMPONENT)
        };
        // Written so that NaN fails every check
        let on_plane = (q + r + s).abs() <= COORD_TOLERANCE;
        if on_plane
            && is_valid_component(q)
            && is_valid_component(r)
            && is_valid_component(s)
        {
            Ok(Self::new_qr(q.round() as i32, r.round() as i32))
        } else {
            Err(HexError::MalformedCoordinate { q, r, s })
        }
    }
}

impl From<CubeCoord> for CoordTriple {
    fn from(coord: CubeCoord) -> Self {
        Self {
            q: coord.q(),
            r: coord.r(),
            s: coord.s(),
        }
    }
}

/// Output form of a [CubeCoord]. All three components get written so that
/// other readers don't have to know to derive s.
#[derive(Serialize)]
#[serde(rename = "CubeCoord")]
struct CoordTriple {
    q: i32,
    r: i32,
    s: i32,
}

/// Raw input form of a [CubeCoord], straight off the wire. Nothing about it
/// has been validated yet, convert with `TryFrom` before using it.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "CubeCoord")]
pub(crate) struct CoordRecord {
    q: f64,
    r: f64,
    s: f64,
}

/// A continuous point in cube space. These come out of the inverse pixel
/// projection, and only live long enough to get rounded to a [CubeCoord].
/// `q + r + s = 0` holds up to floating point error.
#[derive(Copy, Clone, Debug, PartialEq, Display, Add, Sub, Mul)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalCoord {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCoord {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Construct from q and r, deriving s
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self::new(q, r, -q - r)
    }

    /// Round to the nearest cell. Each component is rounded on its own, then
    /// whichever component moved the most gets thrown out and recomputed from
    /// the other two so the result lands back on the plane. Ties go to q
    /// first only if q strictly beats both others, then r if it strictly beats
    /// s, otherwise s.
    pub fn round(self) -> CubeCoord {
        // https://www.redblobgames.com/grids/hexagons/#rounding
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // Otherwise s is the one to recompute, which CubeCoord does for us

        CubeCoord::new_qr(q as i32, r as i32)
    }
}

impl From<CubeCoord> for FractionalCoord {
    fn from(coord: CubeCoord) -> Self {
        Self::new(coord.q().into(), coord.r().into(), coord.s().into())
    }
}

/// Which way to rotate the map. There is deliberately no default; see
/// [HexError::InvalidDirection].
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RotationDirection {
    /// Counterclockwise
    Left,
    /// Clockwise
    Right,
}

impl FromStr for RotationDirection {
    type Err = HexError;

    /// Parse `left` or `right`, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(HexError::InvalidDirection {
                given: Some(s.to_owned()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::hexagonal_shape;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};
    use strum::IntoEnumIterator;

    fn assert_on_plane(coord: CubeCoord) {
        assert_eq!(coord.q() + coord.r() + coord.s(), 0, "{}", coord);
    }

    #[test]
    fn test_new() {
        let coord = CubeCoord::new(1, -3, 2).unwrap();
        assert_eq!(coord, CubeCoord::new_qr(1, -3));
        assert_eq!(coord.s(), 2);
        assert!(matches!(
            CubeCoord::new(1, 1, 1),
            Err(HexError::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn test_new_extremes() {
        let coord = CubeCoord::new(i32::MAX, -i32::MAX, 0).unwrap();
        assert_eq!(coord.s(), 0);
        assert_eq!(coord.length(), i32::MAX as u32);
        assert_eq!(coord.rotate_left().rotate_right(), coord);

        // Sums that overflow i32 are still off the plane
        for (q, r, s) in &[
            (i32::MAX, i32::MAX, 2),
            (i32::MAX, 1, i32::MAX),
            (i32::MIN, i32::MAX, 1),
        ] {
            assert!(
                matches!(
                    CubeCoord::new(*q, *r, *s),
                    Err(HexError::MalformedCoordinate { .. })
                ),
                "({}, {}, {}) should be malformed",
                q,
                r,
                s
            );
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = CubeCoord::new_qr(1, -3);
        let b = CubeCoord::new_qr(-2, 1);

        assert_eq!(a + b, CubeCoord::new(-1, -2, 3).unwrap());
        assert_eq!(a - b, CubeCoord::new(3, -4, 1).unwrap());
        assert_eq!(a.scale(3), CubeCoord::new(3, -9, 6).unwrap());
        assert_eq!(-a, CubeCoord::new(-1, 3, -2).unwrap());

        for coord in &[a + b, a - b, a.scale(-4), b * 7] {
            assert_on_plane(*coord);
        }
    }

    #[test]
    fn test_length() {
        assert_eq!(CubeCoord::ORIGIN.length(), 0);
        assert_eq!(CubeCoord::new_qr(1, 0).length(), 1);
        assert_eq!(CubeCoord::new_qr(2, -3).length(), 3);
        assert_eq!(CubeCoord::new_qr(-4, 4).length(), 4);
    }

    #[test]
    fn test_distance_to() {
        let p0 = CubeCoord::ORIGIN;
        let p1 = CubeCoord::new_qr(-1, 1);
        let p2 = CubeCoord::new_qr(2, -1);
        let p3 = CubeCoord::new_qr(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);
    }

    #[test]
    fn test_rotate() {
        let coord = CubeCoord::new(1, -3, 2).unwrap();
        // (q, r, s) -> (-s, -q, -r)
        assert_eq!(coord.rotate_left(), CubeCoord::new(-2, -1, 3).unwrap());
        // (q, r, s) -> (-r, -s, -q)
        assert_eq!(coord.rotate_right(), CubeCoord::new(3, -2, -1).unwrap());
        assert_eq!(coord.rotate(RotationDirection::Left), coord.rotate_left());
        assert_eq!(
            coord.rotate(RotationDirection::Right),
            coord.rotate_right()
        );
    }

    #[test]
    fn test_rotate_inverse_and_period() {
        for coord in hexagonal_shape(4) {
            assert_eq!(coord.rotate_left().rotate_right(), coord);
            assert_eq!(coord.rotate_right().rotate_left(), coord);

            for direction in RotationDirection::iter() {
                let mut rotated = coord;
                for _ in 0..6 {
                    rotated = rotated.rotate(direction);
                    assert_on_plane(rotated);
                    assert_eq!(rotated.length(), coord.length());
                }
                assert_eq!(rotated, coord);
            }
        }
    }

    #[test]
    fn test_round_exact() {
        for coord in hexagonal_shape(3) {
            assert_eq!(FractionalCoord::from(coord).round(), coord);
        }
    }

    #[test]
    fn test_round() {
        // Each component already rounds onto the plane
        assert_eq!(
            FractionalCoord::new(1.2, -0.9, -0.3).round(),
            CubeCoord::new(1, -1, 0).unwrap()
        );
        // q moved the most, so it gets recomputed
        assert_eq!(
            FractionalCoord::new(0.4, 0.3, -0.7).round(),
            CubeCoord::new(1, 0, -1).unwrap()
        );
        // s moved the most
        assert_eq!(
            FractionalCoord::new(0.3, 0.3, -0.6).round(),
            CubeCoord::ORIGIN
        );
        // q and r tie; q doesn't strictly win, so r gets recomputed
        assert_eq!(
            FractionalCoord::new(0.45, 0.45, -0.9).round(),
            CubeCoord::new(0, 1, -1).unwrap()
        );
    }

    #[test]
    fn test_round_half_tie() {
        // Candidate is (1, 1, -1) with deltas (0.5, 0.5, 0). q doesn't beat r,
        // r beats s, so r is recomputed as -q - s = 0
        let rounded = FractionalCoord::new(0.5, 0.5, -1.0).round();
        assert_eq!(rounded, CubeCoord::new(1, 0, -1).unwrap());
        assert_on_plane(rounded);
    }

    #[test]
    fn test_round_stays_on_plane() {
        let mut q = -3.0;
        while q <= 3.0 {
            let mut r = -3.0;
            while r <= 3.0 {
                assert_on_plane(FractionalCoord::new_qr(q, r).round());
                r += 0.05;
            }
            q += 0.05;
        }
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(
            "left".parse::<RotationDirection>().unwrap(),
            RotationDirection::Left
        );
        assert_eq!(
            " Right ".parse::<RotationDirection>().unwrap(),
            RotationDirection::Right
        );
        match "up".parse::<RotationDirection>() {
            Err(HexError::InvalidDirection { given }) => {
                assert_eq!(given.as_deref(), Some("up"))
            }
            other => panic!("expected InvalidDirection, got {:?}", other),
        }
        assert!(matches!(
            "".parse::<RotationDirection>(),
            Err(HexError::InvalidDirection { .. })
        ));
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &CubeCoord::new_qr(1, -3),
            &[
                Token::Struct {
                    name: "CubeCoord",
                    len: 3,
                },
                Token::Str("q"),
                Token::I32(1),
                Token::Str("r"),
                Token::I32(-3),
                Token::Str("s"),
                Token::I32(2),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_off_plane() {
        assert_de_tokens_error::<CubeCoord>(
            &[
                Token::Struct {
                    name: "CubeCoord",
                    len: 3,
                },
                Token::Str("q"),
                Token::I32(1),
                Token::Str("r"),
                Token::I32(1),
                Token::Str("s"),
                Token::I32(1),
                Token::StructEnd,
            ],
            "malformed coordinate (1, 1, 1); must be integers with q+r+s=0",
        );
    }

    #[test]
    fn test_from_record() {
        let record = CoordRecord {
            q: 2.0,
            r: -1.0,
            s: -1.0,
        };
        assert_eq!(
            CubeCoord::try_from(record).unwrap(),
            CubeCoord::new(2, -1, -1).unwrap()
        );

        for (q, r, s) in &[
            (0.5, -0.5, 0.0),
            (1.0, 1.0, 0.0),
            (f64::NAN, 0.0, 0.0),
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            // Integral and on the plane, but too big for an i32
            (3e9, -3e9, 0.0),
            (3e9, 3e9, -6e9),
            (-2147483648.0, 2147483647.0, 1.0),
        ] {
            let record = CoordRecord {
                q: *q,
                r: *r,
                s: *s,
            };
            assert!(
                matches!(
                    CubeCoord::try_from(record),
                    Err(HexError::MalformedCoordinate { .. })
                ),
                "{:?} should be malformed",
                record
            );
        }
    }
}
