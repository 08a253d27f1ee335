//! Sketch Core Types and Rendering
//!
//! This crate provides the object model and the SVG text emitter used by
//! Sketch pictures. It includes:
//!
//! - **Geometry**: The 2-D [`geometry::Point`] value type
//! - **Render**: Indentation-aware output state ([`render::RenderContext`])
//! - **Objects**: SVG primitives ([`object::Circle`], [`object::Polyline`], [`object::Text`])
//! - **Container**: The [`container::ObjectContainer`] sink and the
//!   [`container::Drawable`] capability for composite shapes
//! - **Document**: The [`document::Document`] container that emits a complete SVG file
//!
//! # Example
//!
//! ```
//! use sketch_core::{document::Document, geometry::Point, object::Circle};
//!
//! let mut doc = Document::new();
//! doc.add(Circle::new().with_center(Point::new(20.0, 20.0)).with_radius(5.0));
//!
//! let svg = doc.render_to_string().expect("rendering to memory");
//! assert!(svg.contains(r#"  <circle cx="20" cy="20" r="5" />"#));
//! ```

pub mod container;
pub mod document;
pub mod geometry;
pub mod object;
pub mod render;
