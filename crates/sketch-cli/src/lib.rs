//! CLI logic for the Sketch demo renderer.
//!
//! Draws the demo picture and writes it as SVG to standard output or to the
//! file given with `--output`.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::File,
    io::{self, BufWriter},
};

use log::info;

use sketch::{
    SceneBuilder, SketchError,
    container::Drawable,
    geometry::Point,
    shapes::{Snowman, Star, Triangle},
};

/// Returns the demo picture: a triangle, a five-ray star and a snowman.
pub fn demo_picture() -> Vec<Box<dyn Drawable>> {
    vec![
        Box::new(Triangle::new(
            Point::new(100.0, 20.0),
            Point::new(120.0, 50.0),
            Point::new(80.0, 40.0),
        )),
        Box::new(Star::new(Point::new(50.0, 20.0), 10.0, 4.0, 5)),
        Box::new(Snowman::new(Point::new(30.0, 20.0), 10.0)),
    ]
}

/// Run the Sketch CLI application
///
/// # Errors
///
/// Returns `SketchError` for:
/// - Configuration loading errors
/// - Output I/O errors
pub fn run(args: &Args) -> Result<(), SketchError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let builder = SceneBuilder::new(app_config);
    let document = builder.build(&demo_picture());

    match &args.output {
        Some(path) => {
            info!(output_path = path.as_str(); "Writing SVG to file");
            let mut out = BufWriter::new(File::create(path)?);
            builder.render(&document, &mut out)?;
            info!(output_file = path.as_str(); "SVG exported successfully");
        }
        None => {
            let mut out = io::stdout().lock();
            builder.render(&document, &mut out)?;
        }
    }

    Ok(())
}
