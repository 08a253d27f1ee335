//! Reference shapes built from SVG primitives.
//!
//! Each shape implements [`Drawable`](sketch_core::container::Drawable) and
//! adds its primitives to a container in a fixed order.

mod snowman;
mod star;
mod triangle;

pub use snowman::Snowman;
pub use star::{Star, create_star};
pub use triangle::Triangle;
