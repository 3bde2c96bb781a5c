pub mod config;
pub mod partition;
pub mod report;
pub mod simulator;
mod parallel;
mod sequential;

pub use self::config::{OutputMode, SimulationConfig, Strategy};
pub use self::partition::StridePartition;
pub use self::report::{ConsoleReporter, NullReporter, Reporter};
pub use self::simulator::Simulator;
