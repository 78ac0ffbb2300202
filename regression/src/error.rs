use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire regression module.
pub type Result<T> = std::result::Result<T, SketchErr>;

/// The regression module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidSurface {
        width: f32,
        height: f32,
    },
    InvalidLearningRate(f32),
    InvalidDecayRate(f32),
    InvalidHyperParam {
        name: &'static str,
        value: f32,
    },
}

impl Display for SketchErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SketchErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
            SketchErr::InvalidSurface { width, height } => format!(
                "The drawing surface must have a positive finite size, got {width}x{height}"
            ),
            SketchErr::InvalidLearningRate(lr) => {
                format!("The learning rate must be positive and finite, got {lr}")
            }
            SketchErr::InvalidDecayRate(rate) => {
                format!("The decay rate must be in [0, 1), got {rate}")
            }
            SketchErr::InvalidHyperParam { name, value } => {
                format!("Invalid value for optimizer hyper-parameter {name}: {value}")
            }
        };

        write!(f, "{s}")
    }
}

impl Error for SketchErr {}
