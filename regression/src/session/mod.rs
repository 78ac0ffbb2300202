mod builder;
mod command;
mod config;
mod events;
mod session;

pub use builder::SessionBuilder;
pub use command::Command;
pub use config::{OptimizerConfig, SessionConfig};
pub use events::{EventLog, LogLine};
pub use session::{FrameReport, PlayState, Session};
