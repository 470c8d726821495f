//! Mounting, unmounting, and process-wide tracing setup.

pub mod page;
pub mod telemetry;

pub use page::*;
pub use telemetry::*;
