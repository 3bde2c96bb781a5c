mod gravity;

pub use self::gravity::{distance, pairwise_acceleration, update_acceleration, G};
