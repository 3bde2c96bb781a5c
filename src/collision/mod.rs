mod elastic;

pub use self::elastic::{handle_collisions, is_collided};
