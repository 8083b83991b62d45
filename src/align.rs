//! Edge alignment of one rect inside another, for either y-axis convention.
//!
//! # Example
//!
//! ```
//! use rectalign::{Aligner, Alignment, CoordinateOrigin, Rect};
//!
//! let badge = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let panel = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! // Screen-style coordinates: y grows downward.
//! let screen = Aligner::new(CoordinateOrigin::TopLeft);
//! let r = screen.align(badge, panel, Alignment::TOP | Alignment::RIGHT);
//! assert_eq!((r.x(), r.y()), (90.0, 0.0));
//!
//! // Math-style coordinates: y grows upward, so "top" is the far edge.
//! let r = badge.align_in(panel, Alignment::TOP | Alignment::RIGHT, CoordinateOrigin::BottomLeft);
//! assert_eq!((r.x(), r.y()), (90.0, 90.0));
//! ```

use core::ops::{BitAnd, BitOr, BitOrAssign};

use num_traits::Float;

use crate::geometry::Rect;

/// Set of edges to snap to, combined with `|`.
///
/// Bit values match the classic bitmask layout (top = 1, right = 2,
/// bottom = 4, left = 8), so masks stored as integers stay compatible.
///
/// Every combination is valid. When both edges of an axis are requested
/// the far edge of the evaluation order wins: bottom beats top, right
/// beats left. See [`align_in_rect`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Alignment(u8);

impl Alignment {
    /// No alignment; the rect is returned unchanged.
    pub const NONE: Self = Self(0);
    /// Top edge. Which y that is depends on [`CoordinateOrigin`].
    pub const TOP: Self = Self(1);
    /// Right edge.
    pub const RIGHT: Self = Self(1 << 1);
    /// Bottom edge. Which y that is depends on [`CoordinateOrigin`].
    pub const BOTTOM: Self = Self(1 << 2);
    /// Left edge, `x = 0`.
    pub const LEFT: Self = Self(1 << 3);
    /// All four edges. Resolves to bottom-right.
    pub const ALL: Self = Self(0b1111);

    /// Raw bitmask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// From a raw bitmask. Returns `None` if any bit above the four edge
    /// flags is set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// From a raw bitmask, dropping unknown bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Whether every flag in `other` is also set here.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flags set in either mask.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for Alignment {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Alignment {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Alignment {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Which corner of the container is `(0, 0)` for the y axis.
///
/// x always grows rightward; only the direction of y differs. There is no
/// `Default`; callers pick the convention of their drawing surface, usually
/// once, via [`Aligner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateOrigin {
    /// y grows downward; the top edge is y = 0.
    TopLeft,
    /// y grows upward; the bottom edge is y = 0.
    BottomLeft,
}

impl CoordinateOrigin {
    /// y offset that puts `rect` against the container's top edge.
    fn top_y(self, rect: &Rect, container: &Rect) -> f64 {
        match self {
            Self::TopLeft => 0.0,
            Self::BottomLeft => far_y(rect, container),
        }
    }

    /// y offset that puts `rect` against the container's bottom edge.
    fn bottom_y(self, rect: &Rect, container: &Rect) -> f64 {
        match self {
            Self::TopLeft => far_y(rect, container),
            Self::BottomLeft => 0.0,
        }
    }
}

// Edge offsets use the magnitude of each dimension; a negative width or
// height spans the same distance as its positive counterpart.

fn far_x(rect: &Rect, container: &Rect) -> f64 {
    Float::abs(container.width()) - Float::abs(rect.width())
}

fn far_y(rect: &Rect, container: &Rect) -> f64 {
    Float::abs(container.height()) - Float::abs(rect.height())
}

/// Align `rect` inside `container` by moving its origin.
///
/// Only `rect`'s origin changes. The container's origin is ignored: offsets
/// are computed as if the container sat at `(0, 0)`, the same convention
/// as [`Rect::center_in`].
///
/// Flags are applied in a fixed order, each one overwriting its axis:
///
/// 1. top
/// 2. left (`x = 0`)
/// 3. bottom
/// 4. right (`x = |container.width| - |rect.width|`)
///
/// so `TOP | BOTTOM` lands on the bottom edge and `LEFT | RIGHT` on the
/// right edge. Axes without a flag keep their original coordinate.
///
/// Far-edge offsets use the absolute width and height of both rects, so
/// negative dimensions align like their positive counterparts. The size
/// itself is returned unchanged.
pub fn align_in_rect(
    rect: Rect,
    container: Rect,
    alignment: Alignment,
    origin: CoordinateOrigin,
) -> Rect {
    let mut rect = rect;

    if alignment.contains(Alignment::TOP) {
        rect = rect.with_origin_y(origin.top_y(&rect, &container));
    }

    if alignment.contains(Alignment::LEFT) {
        rect = rect.with_origin_x(0.0);
    }

    if alignment.contains(Alignment::BOTTOM) {
        rect = rect.with_origin_y(origin.bottom_y(&rect, &container));
    }

    if alignment.contains(Alignment::RIGHT) {
        rect = rect.with_origin_x(far_x(&rect, &container));
    }

    rect
}

impl Rect {
    /// Method form of [`align_in_rect`].
    pub fn align_in(
        self,
        container: Rect,
        alignment: Alignment,
        origin: CoordinateOrigin,
    ) -> Self {
        align_in_rect(self, container, alignment, origin)
    }
}

/// Alignment with a configured coordinate-system origin.
///
/// Holds the convention once so call sites only pass rects and flags.
/// Build one per drawing surface (or per target) and share it; it is `Copy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aligner {
    origin: CoordinateOrigin,
}

impl Aligner {
    /// Create an aligner for the given convention.
    pub const fn new(origin: CoordinateOrigin) -> Self {
        Self { origin }
    }

    /// The configured convention.
    pub const fn origin(&self) -> CoordinateOrigin {
        self.origin
    }

    /// [`align_in_rect`] using the configured origin.
    pub fn align(&self, rect: Rect, container: Rect, alignment: Alignment) -> Rect {
        align_in_rect(rect, container, alignment, self.origin)
    }
}

impl From<CoordinateOrigin> for Aligner {
    fn from(origin: CoordinateOrigin) -> Self {
        Self::new(origin)
    }
}
