mod body;
mod factory;

pub use self::body::Body;
pub use self::factory::{bodies_from_file, bodies_from_reader, random_bodies};
