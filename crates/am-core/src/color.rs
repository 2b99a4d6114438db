//! LED / camera colour catalog.
//!
//! Descriptor parameters such as `cle`, `clr` and `l` carry colours as small
//! integers.  The mapping is fixed:
//!
//! | Value | Colour    |
//! |-------|-----------|
//! | 0     | black/off |
//! | 1     | green     |
//! | 2     | blue      |
//! | 3     | red       |
//! | 4     | yellow    |
//! | 5     | magenta   |
//! | 6     | cyan      |

/// A colour shown on the robot's LEDs or perceived by its camera.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedColor {
    /// LEDs off.
    #[default]
    Black,
    Green,
    Blue,
    Red,
    Yellow,
    Magenta,
    Cyan,
}

impl LedColor {
    /// Decode a descriptor parameter value.  The value is rounded to the
    /// nearest integer; anything outside the catalog yields `None`.
    pub fn from_parameter(value: f64) -> Option<LedColor> {
        if !value.is_finite() {
            return None;
        }
        match value.round() as i64 {
            0 => Some(LedColor::Black),
            1 => Some(LedColor::Green),
            2 => Some(LedColor::Blue),
            3 => Some(LedColor::Red),
            4 => Some(LedColor::Yellow),
            5 => Some(LedColor::Magenta),
            6 => Some(LedColor::Cyan),
            _ => None,
        }
    }

    /// Inverse of [`from_parameter`](Self::from_parameter).
    pub fn as_parameter(self) -> f64 {
        match self {
            LedColor::Black   => 0.0,
            LedColor::Green   => 1.0,
            LedColor::Blue    => 2.0,
            LedColor::Red     => 3.0,
            LedColor::Yellow  => 4.0,
            LedColor::Magenta => 5.0,
            LedColor::Cyan    => 6.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedColor::Black   => "black",
            LedColor::Green   => "green",
            LedColor::Blue    => "blue",
            LedColor::Red     => "red",
            LedColor::Yellow  => "yellow",
            LedColor::Magenta => "magenta",
            LedColor::Cyan    => "cyan",
        }
    }
}

impl std::fmt::Display for LedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
