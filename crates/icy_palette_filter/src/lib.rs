#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::float_cmp
)]
//! Palette filtering for indexed-color images.
//!
//! A [`PaletteFilter`] compares every entry of a source palette against a
//! target color using the redmean color difference and builds a new palette
//! in which the matching entries are replaced by a fill color or made
//! transparent. The pixel index buffer of the image stays untouched, only the
//! palette bound to it changes.

mod error;
pub use error::{PaletteError, Result};

mod color;
pub use color::*;

mod palette;
pub use palette::*;

mod palette_format;
pub use palette_format::*;

mod compare;
pub use compare::*;

mod filter;
pub use filter::*;
