mod euler;

pub use self::euler::step;
