pub mod model;
mod sketch;

pub use sketch::SketchState;
