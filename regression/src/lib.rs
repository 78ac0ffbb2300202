pub mod arch;
pub mod buffers;
pub mod coords;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod optimization;
pub mod session;
pub mod training;

pub use coords::{Point, Surface};
pub use error::{Result, SketchErr};
pub use session::{Command, FrameReport, PlayState, Session, SessionBuilder, SessionConfig};
