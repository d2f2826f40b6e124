pub mod state;

pub use state::{MonitorState, TickOutcome};
