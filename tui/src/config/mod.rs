pub mod builder;
pub mod json;
pub mod model;
