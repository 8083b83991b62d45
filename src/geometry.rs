//! Points, sizes and rectangles with integral normalization, scaling and centering.
//!
//! All types are plain `Copy` values. Every operation takes `self` by value
//! and returns a new value; nothing is modified in place.
//!
//! # Example
//!
//! ```
//! use rectalign::{Point, Rect, Size};
//!
//! let rect = Rect::new(1.2, 1.7, 10.0, 10.0).scale(2.0, 0.5);
//! assert_eq!(rect, Rect::new(1.0, 2.0, 20.0, 5.0));
//!
//! let center = Size::new(10.0, 10.0).center_in(Size::new(100.0, 50.0));
//! assert_eq!(center, Point::new(45.0, 20.0));
//! ```

use num_traits::Float;

/// Round half away from zero, independent of `std`.
#[inline]
fn round(v: f64) -> f64 {
    Float::round(v)
}

/// A 2-D coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both components to the nearest whole number.
    ///
    /// Halves round away from zero: `0.5 → 1`, `-0.5 → -1`.
    pub fn integral(self) -> Self {
        Self {
            x: round(self.x),
            y: round(self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height.
///
/// Dimensions are usually non-negative, but nothing here checks that.
/// Zero and negative values pass through every operation unchanged.
/// Alignment measures far edges by magnitude (see [`crate::align_in_rect`]).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Round width and height to the nearest whole number.
    pub fn integral(self) -> Self {
        Self {
            width: round(self.width),
            height: round(self.height),
        }
    }

    /// Multiply width by `scale_x` and height by `scale_y`, then round.
    ///
    /// Factors are not validated; zero or negative factors produce zero or
    /// negative dimensions.
    pub fn scale(self, scale_x: f64, scale_y: f64) -> Self {
        Self {
            width: self.width * scale_x,
            height: self.height * scale_y,
        }
        .integral()
    }

    /// Offset at which a box of this size sits centered inside `outer`,
    /// with both boxes sharing the origin `(0, 0)`.
    ///
    /// The result is always integral. When `self` is larger than `outer`
    /// on an axis, that component is negative.
    ///
    /// ```
    /// use rectalign::{Point, Size};
    ///
    /// let p = Size::new(120.0, 10.0).center_in(Size::new(100.0, 50.0));
    /// assert_eq!(p, Point::new(-10.0, 20.0));
    /// ```
    pub fn center_in(self, outer: Size) -> Point {
        Point {
            x: (outer.width - self.width) / 2.0,
            y: (outer.height - self.height) / 2.0,
        }
        .integral()
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// Axis-aligned rectangle: an origin and a size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Zero origin, zero size.
    pub const ZERO: Self = Self::from_parts(Point::ZERO, Size::ZERO);

    /// Create a rect from origin and size components.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from an origin point and a size.
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Origin x.
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Origin y.
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Width of the size.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the size.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Smallest x coordinate (the origin's x).
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Smallest y coordinate (the origin's y).
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// `origin.x + width`.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// `origin.y + height`.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Copy with a new origin.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Copy with a new origin x component.
    pub fn with_origin_x(mut self, x: f64) -> Self {
        self.origin.x = x;
        self
    }

    /// Copy with a new origin y component.
    pub fn with_origin_y(mut self, y: f64) -> Self {
        self.origin.y = y;
        self
    }

    /// Copy with a new size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Copy with a new width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.size.width = width;
        self
    }

    /// Copy with a new height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.size.height = height;
        self
    }

    /// Round origin and size components independently to whole numbers.
    pub fn integral(self) -> Self {
        Self {
            origin: self.origin.integral(),
            size: self.size.integral(),
        }
    }

    /// Scale the size, then normalize the whole rect to integral values.
    ///
    /// The origin is not scaled, only rounded. A fractional input origin
    /// still comes back integral.
    pub fn scale(self, scale_x: f64, scale_y: f64) -> Self {
        self.with_size(self.size.scale(scale_x, scale_y)).integral()
    }

    /// Center this rect inside `container`, keeping its size.
    ///
    /// Only the container's size is used. Its origin is ignored, so the
    /// result is relative to `(0, 0)`; callers centering inside an offset
    /// container translate the result themselves.
    pub fn center_in(self, container: Rect) -> Self {
        self.with_origin(self.size.center_in(container.size))
    }
}

impl From<(Point, Size)> for Rect {
    fn from((origin, size): (Point, Size)) -> Self {
        Self::from_parts(origin, size)
    }
}
