pub mod math;
pub mod bodies;
pub mod forces;
pub mod collision;
pub mod integration;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{Simulator, SimulationConfig, Strategy, OutputMode};
pub use crate::core::{Reporter, ConsoleReporter, NullReporter};
pub use crate::bodies::Body;
pub use crate::math::Vector3;

/// Error types for the simulation engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SimulationError {
        #[error("empty body set: at least one body is required")]
        EmptyBodySet,

        #[error("invalid duration: {0} seconds (must be at least 1)")]
        InvalidDuration(u64),

        #[error("strategy not implemented: {0}")]
        Unimplemented(&'static str),

        #[error("malformed body input: {0}")]
        Parse(String),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Result type for simulation engine operations
pub type Result<T> = std::result::Result<T, error::SimulationError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
