use crate::bodies::Body;

/// Advances one body by one second of explicit Euler integration.
///
/// A body whose velocity was just overwritten by collision response must not
/// also receive its acceleration increment in the same second (that would
/// double-count the impulse), so the velocity update is skipped for collided
/// bodies. Position always advances by the current velocity.
pub fn step(body: &mut Body) {
    if !body.collided {
        body.velocity += body.acceleration;
    }
    body.position += body.velocity;
}
