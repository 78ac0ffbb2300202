pub mod loss;
mod model;

pub use model::LinearModel;
