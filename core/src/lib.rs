//! Vital-sign simulation and threshold-alerting core for the patient monitor.
//!
//! The simulator walks a vitals snapshot forward inside fixed clinical bands,
//! the evaluator flags out-of-range readings, and the monitor state ties both
//! together for whichever scheduler drives the ticks.

pub mod alerts;
pub mod monitor;
pub mod prelude;
pub mod simulator;
pub mod telemetry;
pub mod vitals;

pub use prelude::{VitalsError, VitalsResult};
