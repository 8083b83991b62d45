//! Rect geometry helpers for layout code: integral rounding, scaling,
//! centering, and edge alignment of one rect inside another.
//!
//! Pure value types and total functions. No allocations, no errors from any
//! geometric operation, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`]: `Point`, `Size`, `Rect`, rounding, scaling, centering, field replacement
//! - [`align`]: Alignment flags, coordinate-system origin, the alignment engine
//! - [`parse`]: Text forms of alignment masks and coordinate origins
//! - `svg`: SVG rendering of an alignment (feature `svg`)
//!
//! # Example
//!
//! ```
//! use rectalign::{Aligner, Alignment, CoordinateOrigin, Rect};
//!
//! let aligner = Aligner::new(CoordinateOrigin::TopLeft);
//! let icon = Rect::new(0.0, 0.0, 16.0, 16.0);
//! let toolbar = Rect::new(0.0, 0.0, 320.0, 40.0);
//!
//! let centered = icon.center_in(toolbar);
//! assert_eq!((centered.x(), centered.y()), (152.0, 12.0));
//!
//! let pinned = aligner.align(centered, toolbar, Alignment::RIGHT);
//! assert_eq!((pinned.x(), pinned.y()), (304.0, 12.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod align;
pub mod geometry;
pub mod parse;
#[cfg(feature = "svg")]
pub mod svg;

pub use align::{Aligner, Alignment, CoordinateOrigin, align_in_rect};
pub use geometry::{Point, Rect, Size};
pub use parse::ParseError;
