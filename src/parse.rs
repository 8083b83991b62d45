//! Text forms of [`Alignment`] and [`CoordinateOrigin`].
//!
//! Lets the coordinate convention and alignment masks come from config files
//! or command-line flags. Matching is ASCII case-insensitive and does not
//! allocate.
//!
//! ```
//! use rectalign::{Alignment, CoordinateOrigin};
//!
//! let origin: CoordinateOrigin = "bottom-left".parse().unwrap();
//! assert_eq!(origin, CoordinateOrigin::BottomLeft);
//!
//! let a: Alignment = "Top | Right".parse().unwrap();
//! assert_eq!(a, Alignment::TOP | Alignment::RIGHT);
//! assert_eq!(a.to_string(), "top|right");
//! ```

use core::fmt;
use core::str::FromStr;

use crate::align::{Alignment, CoordinateOrigin};

/// Error from parsing an alignment or coordinate origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the coordinate origin names.
    UnknownOrigin,
    /// A flag name other than `top`, `right`, `bottom`, `left`.
    UnknownAlignment,
    /// Empty entry between separators, e.g. `"top||left"`.
    EmptyFlag,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrigin => {
                f.write_str("unknown coordinate origin (expected top-left or bottom-left)")
            }
            Self::UnknownAlignment => {
                f.write_str("unknown alignment flag (expected top, right, bottom or left)")
            }
            Self::EmptyFlag => f.write_str("empty alignment flag"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Flag names in display order.
const FLAG_NAMES: [(&str, Alignment); 4] = [
    ("top", Alignment::TOP),
    ("right", Alignment::RIGHT),
    ("bottom", Alignment::BOTTOM),
    ("left", Alignment::LEFT),
];

fn is_separator(c: char) -> bool {
    matches!(c, '|' | ',' | '+')
}

fn matches_any(s: &str, names: &[&str]) -> bool {
    names.iter().any(|n| s.eq_ignore_ascii_case(n))
}

fn parse_flag(s: &str) -> Result<Alignment, ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyFlag);
    }
    FLAG_NAMES
        .iter()
        .find(|(name, _)| s.eq_ignore_ascii_case(name))
        .map(|&(_, flag)| flag)
        .ok_or(ParseError::UnknownAlignment)
}

impl FromStr for Alignment {
    type Err = ParseError;

    /// Accepts `none`, `all`, an empty string, or flag names joined by
    /// `|`, `,` or `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Alignment::NONE);
        }
        if s.eq_ignore_ascii_case("all") {
            return Ok(Alignment::ALL);
        }

        let mut out = Alignment::NONE;
        for part in s.split(is_separator) {
            out |= parse_flag(part.trim())?;
        }
        Ok(out)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for CoordinateOrigin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if matches_any(s, &["top-left", "topleft", "top_left"]) {
            Ok(Self::TopLeft)
        } else if matches_any(s, &["bottom-left", "bottomleft", "bottom_left"]) {
            Ok(Self::BottomLeft)
        } else {
            Err(ParseError::UnknownOrigin)
        }
    }
}

impl fmt::Display for CoordinateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TopLeft => "top-left",
            Self::BottomLeft => "bottom-left",
        })
    }
}
